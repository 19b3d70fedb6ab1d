mod lexer_tests;
mod no_undefined_variables_tests;
mod type_info_tests;
mod utils;
mod validation_context_tests;
mod visitor_tests;
