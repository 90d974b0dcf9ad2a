pub mod scene_file_reader;
