pub mod doc_engine_error;
