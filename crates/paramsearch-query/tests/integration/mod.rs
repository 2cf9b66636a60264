mod concurrency;
mod errors;
mod schema_file;
mod translate;
