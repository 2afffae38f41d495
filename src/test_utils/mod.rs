#![allow(missing_docs)]

pub(crate) mod fixtures;
pub(crate) mod http;

pub(crate) use fixtures::{
    get_test_server, get_test_state, insert_test_blog, insert_test_category, insert_test_user,
};
pub(crate) use http::{assert_bad_request_starting_with, assert_failure};
