mod definition_namer_tests;
