pub mod reenactor_command;
