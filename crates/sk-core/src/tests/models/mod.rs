mod identity;
mod locale;
mod role;
