pub mod passgen;
