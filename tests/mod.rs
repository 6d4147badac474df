mod aggregation_property_tests;
