pub mod errorhandler;
