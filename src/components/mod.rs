pub mod network_background;
