pub mod debounce;
pub mod storage;
