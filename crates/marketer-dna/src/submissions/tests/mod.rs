mod common;
mod routing;
mod salary;
