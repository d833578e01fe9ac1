mod doubles;
mod integration;
