pub mod stealthex;
