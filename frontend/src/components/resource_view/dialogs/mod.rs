pub mod edit_user;
