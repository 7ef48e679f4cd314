// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Which page forms get intercepted, and where their data is posted.

pub const LOADING_INDICATOR_ID: &str = "loading-spinner";

/// One row of the binding table: a form's element ID and the endpoint it submits to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormRoute {
	pub form_id: &'static str,
	pub path: &'static str,
}

pub const FORM_ROUTES: &[FormRoute] = &[
	FormRoute {
		form_id: "form-sae",
		path: "/processar-sae",
	},
	FormRoute {
		form_id: "form-saf",
		path: "/processar-saf",
	},
	FormRoute {
		form_id: "form-sab",
		path: "/processar-sab",
	},
	FormRoute {
		form_id: "form-smt",
		path: "/processar-smt",
	},
];

/// What a page has under a given element ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementLookup<F> {
	Form(F),
	/// Something exists under the ID, but it isn't a form.
	NotAForm,
	Missing,
}

/// Finds form elements on the page.
pub trait FormLookup {
	type Form;

	fn find_form(&self, id: &str) -> ElementLookup<Self::Form>;
}

/// A form found on the page along with the endpoint it submits to. Lives as long as the page.
#[derive(Clone, Debug)]
pub struct FormBinding<F> {
	pub form_id: &'static str,
	pub form: F,
	pub path: &'static str,
}

/// Resolves every route in the table against the page. Routes whose ID is missing or names something
/// other than a form are skipped.
pub fn bind_forms<L: FormLookup>(lookup: &L, routes: &[FormRoute]) -> Vec<FormBinding<L::Form>> {
	routes
		.iter()
		.filter_map(|route| match lookup.find_form(route.form_id) {
			ElementLookup::Form(form) => Some(FormBinding {
				form_id: route.form_id,
				form,
				path: route.path,
			}),
			ElementLookup::NotAForm => {
				tracing::warn!(form_id = route.form_id, "Element isn't a form; not binding it");
				None
			}
			ElementLookup::Missing => {
				tracing::debug!(form_id = route.form_id, "Form not on this page; skipping");
				None
			}
		})
		.collect()
}

/// Whether binding has to wait for `DOMContentLoaded`, given `document.readyState`.
pub fn must_wait_for_content(ready_state: &str) -> bool {
	ready_state == "loading"
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Default)]
	struct Page {
		form_ids: Vec<&'static str>,
		other_ids: Vec<&'static str>,
	}

	impl FormLookup for Page {
		type Form = String;

		fn find_form(&self, id: &str) -> ElementLookup<String> {
			if let Some(form_id) = self.form_ids.iter().find(|form_id| **form_id == id) {
				ElementLookup::Form(format!("<form id={}>", form_id))
			} else if self.other_ids.iter().any(|other_id| *other_id == id) {
				ElementLookup::NotAForm
			} else {
				ElementLookup::Missing
			}
		}
	}

	#[test]
	fn absent_forms_are_skipped() {
		let page = Page::default();
		let bindings = bind_forms(&page, FORM_ROUTES);
		assert!(bindings.is_empty());
	}

	#[test]
	fn present_forms_keep_their_paths() {
		let page = Page {
			form_ids: vec!["form-smt", "form-sab", "unrelated"],
			..Page::default()
		};
		let bindings = bind_forms(&page, FORM_ROUTES);

		let bound: Vec<(&str, &str)> = bindings.iter().map(|binding| (binding.form_id, binding.path)).collect();
		assert_eq!(bound, vec![("form-sab", "/processar-sab"), ("form-smt", "/processar-smt")]);
		assert_eq!(bindings[0].form, "<form id=form-sab>");
	}

	#[test]
	fn non_form_element_counts_as_absent() {
		let page = Page {
			form_ids: vec!["form-sae"],
			other_ids: vec!["form-saf"],
		};
		let bindings = bind_forms(&page, FORM_ROUTES);

		let bound: Vec<&str> = bindings.iter().map(|binding| binding.form_id).collect();
		assert_eq!(bound, vec!["form-sae"]);
	}

	#[test]
	fn binding_waits_only_while_document_is_loading() {
		assert!(must_wait_for_content("loading"));
		assert!(!must_wait_for_content("interactive"));
		assert!(!must_wait_for_content("complete"));
	}

	#[test]
	fn every_route_has_a_distinct_form() {
		for (index, route) in FORM_ROUTES.iter().enumerate() {
			assert!(route.path.starts_with('/'));
			assert!(FORM_ROUTES[index + 1..].iter().all(|other| other.form_id != route.form_id));
		}
	}
}
