mod policy_tests;
mod property_table_tests;
