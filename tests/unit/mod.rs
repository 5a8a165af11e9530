mod degenerate_tests;
mod parity_tests;
mod reference_scenarios;
mod solver_tests;
