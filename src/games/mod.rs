pub mod quarto;
