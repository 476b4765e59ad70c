#[cfg(test)]
mod common;

#[cfg(test)]
mod shorten_create_tests;

#[cfg(test)]
mod shorten_resolve_tests;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod form_client_tests;
