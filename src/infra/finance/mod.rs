pub mod http_revenue_service;
