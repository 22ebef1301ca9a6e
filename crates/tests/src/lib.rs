#[cfg(test)]
mod common;


#[cfg(test)]
mod session_tests;
