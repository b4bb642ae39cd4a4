mod remote;
mod scenarios;
mod utils;
