pub mod info_row;
