#[cfg(test)]
mod signin_gate_tests;

#[cfg(test)]
mod geocode_acceptance_tests;

#[cfg(test)]
mod address_cascade_tests;

#[cfg(test)]
mod list_patch_tests;

#[cfg(test)]
mod profile_watch_tests;

#[cfg(test)]
mod session_cookie_tests;
