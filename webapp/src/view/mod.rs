// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use seed::{prelude::*, *};

use filmoteca_client::models::catalog::{
    Dataset, Form, InputName, Intent, Row, State,
    form::REQUIRED_FIELD_MESSAGE,
    view::{DELETE_CONTROL, EDIT_CONTROL},
};
use filmoteca_core::MovieField;

use crate::Msg;

pub(crate) fn view(state: &State) -> Node<Msg> {
    div![
        C!["container"],
        form(state.form()),
        table(state),
        state.inline_errors().iter().map(|msg| p![b![msg]]),
    ]
}

const fn caption(field: MovieField) -> &'static str {
    match field {
        MovieField::Title => "Título",
        MovieField::Director => "Director",
        MovieField::Synopsis => "Sinopsis",
        MovieField::Language => "Idioma",
        MovieField::Classification => "Clasificación",
        MovieField::Genre => "Género",
        MovieField::ReleaseDate => "Fecha",
    }
}

fn form(form: &Form) -> Node<Msg> {
    div![
        h2![attrs! {At::Id => "titulo"}, form.header_text()],
        seed::form![
            attrs! {At::Id => "formulario"},
            ev(Ev::Submit, |event| {
                event.prevent_default();
                Msg::from(Intent::SubmitForm)
            }),
            input(form, InputName::Id, "hidden"),
            MovieField::iter_all().map(|field| {
                div![
                    C!["field"],
                    label![caption(field), input(form, field.into(), "text")],
                    IF!(form.is_invalid(field) => div![C!["error-message"], REQUIRED_FIELD_MESSAGE]),
                ]
            }),
            button![
                attrs! {At::Id => "boton", At::Type => "submit"},
                form.submit_text()
            ],
        ]
    ]
}

fn input(form: &Form, name: InputName, input_type: &str) -> Node<Msg> {
    seed::input![
        attrs! {
            At::Name => name.as_str(),
            At::Type => input_type,
            At::Value => form.input(name),
        },
        input_ev(Ev::Input, move |value| {
            Msg::from(Intent::UpdateInput { name, value })
        }),
    ]
}

fn table(state: &State) -> Node<Msg> {
    seed::table![
        attrs! {At::Id => "tablaPeliculas"},
        thead![tr![
            MovieField::iter_all().map(|field| th![caption(field)]),
            th!["Acciones"],
        ]],
        tbody![state.view_rows().map(row)],
    ]
}

fn row(row: Row<'_>) -> Node<Msg> {
    let Row {
        cells,
        edit,
        delete,
    } = row;
    tr![
        cells
            .into_iter()
            .map(|(field, value)| td![C![field.name()], value]),
        td![
            control(EDIT_CONTROL, "Editar", edit, Intent::EditEntity),
            control(DELETE_CONTROL, "Eliminar", delete, Intent::RequestDeletion),
        ],
    ]
}

fn control(
    class: &'static str,
    text: &'static str,
    dataset: Dataset,
    intent: fn(Dataset) -> Intent,
) -> Node<Msg> {
    let mut data_attrs = Attrs::empty();
    for (name, value) in dataset.attributes() {
        data_attrs.add(At::Custom(name.into()), value);
    }
    button![
        C![class],
        attrs! {At::Type => "button"},
        data_attrs,
        ev(Ev::Click, move |_| Msg::from(intent(dataset))),
        text,
    ]
}

#[cfg(test)]
mod tests;
