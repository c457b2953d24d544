mod bearer;
mod jwt;
