pub mod test_color;
