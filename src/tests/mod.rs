mod bit_field_tests;
mod component_tests;
mod system_tests;
