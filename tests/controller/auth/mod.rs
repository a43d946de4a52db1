mod login;
mod logout;
mod signup;
mod user;
