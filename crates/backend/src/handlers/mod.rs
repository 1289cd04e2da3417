pub mod a001_unit_economics;
