/*!
 * Banker's algorithm tests entry point
 */

#[path = "banker/safety_test.rs"]
mod safety_test;
