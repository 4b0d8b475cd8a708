/*!
 * Paging tests entry point
 */

#[path = "paging/replacement_test.rs"]
mod replacement_test;
