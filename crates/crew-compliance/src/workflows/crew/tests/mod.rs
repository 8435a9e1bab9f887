mod clearance;
mod common;
mod form;
mod routing;
