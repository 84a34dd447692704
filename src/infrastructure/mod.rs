pub mod http_catalog;
