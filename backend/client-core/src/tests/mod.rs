mod paths;
mod session;
