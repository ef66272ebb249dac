pub mod a001_service;
pub mod a002_instructor;
pub mod a003_schedule;
pub mod a004_booking;
pub mod a005_review;
