pub mod resource_view;
