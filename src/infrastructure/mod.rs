//! Infrastructure layer - Store implementations and services

pub mod attachment;
pub mod city;
pub mod logging;
pub mod storage;
pub mod user;
