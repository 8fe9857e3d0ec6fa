//! Channel command handlers: CREATE, JOIN, LEAVE, INVITE, KICK.

mod create;
mod invite;
mod join;
mod kick;
mod part;

pub(super) use create::handle_create;
pub(super) use invite::handle_invite;
pub(super) use join::handle_join;
pub(super) use kick::handle_kick;
pub(super) use part::handle_leave;
