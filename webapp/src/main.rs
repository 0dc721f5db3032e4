// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

use seed::{prelude::*, window};

use filmoteca_client::{
    error::RemoteError,
    models::catalog::{self, DELETE_CONFIRMATION_PROMPT, Intent, Settings, Task},
    state::{StateMutation, update_until_task},
};

mod api;
mod view;

// ------ ------
//     Model
// ------ ------

#[derive(Debug)]
pub(crate) struct Mdl {
    collection_url: Result<url::Url, RemoteError>,
    catalog: catalog::State,
}

// ------ ------
//    Message
// ------ ------

pub(crate) type Msg = catalog::Message;

// ------ ------
//    Update
// ------ ------

fn update(msg: Msg, mdl: &mut Mdl, orders: &mut impl Orders<Msg>) {
    seed::log!(msg);
    let was_deletion_pending = mdl.catalog.pending_deletion().is_some();
    let (state_mutation, task) = update_until_task(&mut mdl.catalog, msg);
    if let Some(task) = task {
        dispatch_task(mdl.collection_url.as_ref(), task, orders);
    }
    if let Some(message) = mdl.catalog.take_pending_alert() {
        alert(&message);
    }
    if !was_deletion_pending && mdl.catalog.pending_deletion().is_some() {
        let confirmed = confirm(DELETE_CONFIRMATION_PROMPT);
        orders.send_msg(Intent::ConfirmDeletion { confirmed }.into());
    }
    if mdl.catalog.take_reload_request() {
        reload();
        orders.skip();
        return;
    }
    if state_mutation == StateMutation::Unchanged {
        orders.skip();
    }
}

fn dispatch_task(
    collection_url: Result<&url::Url, &RemoteError>,
    task: Task,
    orders: &mut impl Orders<Msg>,
) {
    match collection_url {
        Ok(collection_url) => {
            let collection_url = collection_url.clone();
            orders.perform_cmd(async move {
                Msg::from(api::execute_task(task, collection_url).await)
            });
        }
        Err(err) => {
            orders.send_msg(task.fail(err.clone()).into());
        }
    }
}

// ------ ------
//    Browser
// ------ ------

fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        seed::error!("Failed to show alert", err);
    }
}

fn confirm(message: &str) -> bool {
    window()
        .confirm_with_message(message)
        .unwrap_or_else(|err| {
            seed::error!("Failed to ask for confirmation", err);
            false
        })
}

fn reload() {
    if let Err(err) = window().location().reload() {
        seed::error!("Failed to reload page", err);
    }
}

// ------ ------
//    View
// ------ ------

fn view(mdl: &Mdl) -> Node<Msg> {
    view::view(&mdl.catalog)
}

// ------ ------
//     Init
// ------ ------

fn init(_: Url, orders: &mut impl Orders<Msg>) -> Mdl {
    let collection_url = api::collection_url();
    if let Err(err) = &collection_url {
        seed::error!("No collection URL", err.to_string());
    }
    orders.send_msg(Intent::FetchAllEntities.into());
    Mdl {
        collection_url,
        catalog: catalog::State::new(Settings::default()),
    }
}

// ------ ------
//     Start
// ------ ------

fn main() {
    App::start("app", init, update, view);
}
