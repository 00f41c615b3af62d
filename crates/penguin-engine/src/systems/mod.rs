pub mod parallax;
