mod advisor;
mod common;
