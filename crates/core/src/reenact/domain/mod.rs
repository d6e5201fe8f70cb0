pub mod reenactor;
