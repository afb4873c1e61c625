//! ResponsiveTable rendering across viewports

use std::cell::RefCell;
use std::rc::Rc;

use rstest::*;
use serde::Serialize;
use sitedash_conf::TableSettings;
use sitedash_tables::{
	CardField, Column, Priority, RenderedTable, ResponsiveTable, SortDirection, Viewport,
};

#[derive(Debug, Clone, Serialize)]
struct Lead {
	name: String,
}

#[derive(Debug, Clone, Serialize)]
struct Project {
	id: u32,
	name: String,
	status: String,
	budget: Option<u64>,
	lead: Lead,
	archived: bool,
}

fn project(id: u32, name: &str, status: &str, budget: Option<u64>, lead: &str) -> Project {
	Project {
		id,
		name: name.to_string(),
		status: status.to_string(),
		budget,
		lead: Lead {
			name: lead.to_string(),
		},
		archived: false,
	}
}

#[fixture]
fn projects() -> Vec<Project> {
	vec![
		project(1, "Riverside Apartments", "Active", Some(1_200_000), "Ana Ruiz"),
		project(2, "Harbor Depot", "Planning", None, "Ben Cho"),
		project(3, "Civic Library", "Delayed", Some(850_000), "Cara Diaz"),
	]
}

#[fixture]
fn table() -> ResponsiveTable<Project> {
	ResponsiveTable::new(vec![
		Column::new("name", "Project").with_priority(Priority::High),
		Column::new("status", "Status")
			.with_priority(Priority::Medium)
			.with_mobile_render(|p: &Project| (p.status != "Active").then(|| p.status.clone())),
		Column::new("budget", "Budget").with_render(|value, _| match value.as_u64() {
			Some(amount) => format!("${}", amount),
			None => "TBD".to_string(),
		}),
		Column::new("lead.name", "Lead").with_priority(Priority::Low),
		Column::new("archived", "Archived").sortable(false),
	])
}

fn header_titles(rendered: &RenderedTable) -> Vec<String> {
	match rendered {
		RenderedTable::Desktop { headers, .. } => headers.iter().map(|h| h.title.clone()).collect(),
		other => panic!("expected desktop layout, got {:?}", other),
	}
}

#[rstest]
#[case(1440, vec!["Project", "Status", "Budget", "Lead", "Archived"])]
#[case(1280, vec!["Project", "Status", "Budget", "Lead", "Archived"])]
#[case(1100, vec!["Project", "Status", "Budget", "Archived"])]
#[case(800, vec!["Project", "Budget", "Archived"])]
fn test_desktop_columns_follow_priority(
	table: ResponsiveTable<Project>,
	projects: Vec<Project>,
	#[case] width: u32,
	#[case] expected: Vec<&str>,
) {
	let rendered = table.render(&projects, Viewport::new(width));
	assert_eq!(header_titles(&rendered), expected);
}

#[rstest]
fn test_desktop_cells(table: ResponsiveTable<Project>, projects: Vec<Project>) {
	let RenderedTable::Desktop { rows, .. } = table.render(&projects, Viewport::new(1440)) else {
		panic!("expected desktop layout");
	};

	assert_eq!(rows.len(), 3);
	assert_eq!(
		rows[0].cells,
		vec!["Riverside Apartments", "Active", "$1200000", "Ana Ruiz", "false"]
	);
	assert_eq!(rows[1].cells[2], "TBD");
}

#[rstest]
fn test_narrow_viewport_renders_cards(table: ResponsiveTable<Project>, projects: Vec<Project>) {
	let rendered = table.render(&projects, Viewport::new(375));
	let RenderedTable::Cards { cards } = rendered else {
		panic!("expected card layout");
	};

	assert_eq!(cards.len(), 3);
	// Low-priority columns still appear on cards; the active status is hidden
	assert_eq!(
		cards[0].fields,
		vec![
			CardField {
				title: "Project".to_string(),
				content: "Riverside Apartments".to_string(),
			},
			CardField {
				title: "Budget".to_string(),
				content: "$1200000".to_string(),
			},
			CardField {
				title: "Lead".to_string(),
				content: "Ana Ruiz".to_string(),
			},
			CardField {
				title: "Archived".to_string(),
				content: "false".to_string(),
			},
		]
	);
	assert!(
		cards[1]
			.fields
			.iter()
			.any(|f| f.title == "Status" && f.content == "Planning")
	);
}

#[rstest]
#[case(375)]
#[case(767)]
#[case(768)]
#[case(1920)]
fn test_empty_collection_shows_only_message(table: ResponsiveTable<Project>, #[case] width: u32) {
	let rendered = table.render(&[], Viewport::new(width));
	assert_eq!(
		rendered,
		RenderedTable::Empty {
			message: "No data available".to_string(),
		}
	);
	assert!(rendered.is_empty());
	assert_eq!(rendered.len(), 0);
}

#[rstest]
fn test_custom_empty_message(table: ResponsiveTable<Project>) {
	let table = table.with_empty_message("No projects yet");
	assert_eq!(
		table.render(&[], Viewport::new(1024)),
		RenderedTable::Empty {
			message: "No projects yet".to_string(),
		}
	);
}

#[rstest]
fn test_missing_nested_value_uses_placeholder() {
	let rows = vec![
		serde_json::json!({ "name": "Depot", "lead": { "name": "Ana" } }),
		serde_json::json!({ "name": "Annex", "lead": null }),
		serde_json::json!({ "name": "Yard" }),
	];
	let table = ResponsiveTable::new(vec![Column::new("name", "Site"), Column::new("lead.name", "Lead")]);

	let RenderedTable::Desktop { rows: rendered, .. } = table.render(&rows, Viewport::new(1440)) else {
		panic!("expected desktop layout");
	};
	let leads: Vec<&str> = rendered.iter().map(|r| r.cells[1].as_str()).collect();
	assert_eq!(leads, vec!["Ana", "-", "-"]);
}

#[rstest]
fn test_settings_change_breakpoints_and_placeholder() {
	let settings = TableSettings {
		mobile_breakpoint: 1000,
		placeholder: "n/a".to_string(),
		..TableSettings::default()
	};
	let table = ResponsiveTable::new(vec![Column::new("name", "Site"), Column::new("code", "Code")])
		.with_settings(&settings);
	let rows = vec![serde_json::json!({ "name": "Depot" })];

	let RenderedTable::Cards { cards } = table.render(&rows, Viewport::new(900)) else {
		panic!("expected card layout");
	};
	assert_eq!(cards[0].fields[1].content, "n/a");
}

#[rstest]
fn test_click_row_same_in_both_layouts(projects: Vec<Project>) {
	let clicked = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&clicked);
	let mut table = ResponsiveTable::new(vec![Column::new("name", "Project")])
		.on_row_click(move |p: &Project| sink.borrow_mut().push(p.id));
	table.sort_by("name", SortDirection::Ascending).unwrap();

	let desktop = table.render(&projects, Viewport::new(1440));
	let cards = table.render(&projects, Viewport::new(375));
	assert_eq!(desktop.row_indices(), vec![2, 1, 0]);
	assert_eq!(cards.row_indices(), desktop.row_indices());

	// Click the first displayed row in each layout
	assert!(table.click_row(&projects, desktop.row_indices()[0]));
	assert!(table.click_row(&projects, cards.row_indices()[0]));
	assert!(!table.click_row(&projects, 99));

	assert_eq!(*clicked.borrow(), vec![3, 3]);
}

#[rstest]
fn test_sorted_render_marks_header(mut table: ResponsiveTable<Project>, projects: Vec<Project>) {
	table.sort_by("budget", SortDirection::Descending).unwrap();

	let rendered = table.render(&projects, Viewport::new(1440));
	let RenderedTable::Desktop { headers, rows } = rendered else {
		panic!("expected desktop layout");
	};

	let budget = headers.iter().find(|h| h.key == "budget").unwrap();
	assert_eq!(budget.sort, Some(SortDirection::Descending));
	assert!(headers.iter().filter(|h| h.key != "budget").all(|h| h.sort.is_none()));
	assert!(!headers.iter().find(|h| h.key == "archived").unwrap().sortable);

	// Missing budget sorts last
	let order: Vec<usize> = rows.iter().map(|r| r.index).collect();
	assert_eq!(order, vec![0, 2, 1]);
}

#[rstest]
fn test_sort_by_nested_key(mut table: ResponsiveTable<Project>, projects: Vec<Project>) {
	table.toggle_sort("lead.name").unwrap();
	table.toggle_sort("lead.name").unwrap();

	let rendered = table.render(&projects, Viewport::new(1440));
	assert_eq!(rendered.row_indices(), vec![2, 1, 0]);
}

#[rstest]
fn test_rendered_table_serialises_with_mode_tag() {
	let rendered = RenderedTable::Empty {
		message: "Nothing here".to_string(),
	};
	assert_eq!(
		serde_json::to_value(&rendered).unwrap(),
		serde_json::json!({ "mode": "empty", "message": "Nothing here" })
	);
}
