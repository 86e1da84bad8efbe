pub mod case_file;
