mod unit_page_service;
