pub mod reverse_reader;
