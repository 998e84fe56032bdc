pub mod s001_user;
