mod association_service_tests;
