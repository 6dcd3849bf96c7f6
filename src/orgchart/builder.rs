use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::config::DefaultRootConfig;
use crate::database::models::{Employee, EmployeeRole};

use super::node::OrganizationChartNode;

/// Deepest level expanded unless configured otherwise; nodes at this level
/// with reports of their own are emitted as truncated leaves.
pub const DEFAULT_MAX_DEPTH: u32 = 32;

/// Build the organization chart for a flat list of active employees.
///
/// The root is the first employee holding the top role; without one, a root
/// is synthesized from `default_root` and everybody without a manager hangs
/// directly below it. Employees the main traversal cannot reach (dangling or
/// missing managers, cycles detached from the root) are attached below the
/// root afterwards, so nobody is dropped. Children keep input order.
///
/// Never fails and terminates on any reports-to graph: a node already on the
/// current root-to-leaf path is emitted as a truncated leaf.
pub fn build_organization_chart(
    employees: &[Employee],
    default_root: &DefaultRootConfig,
) -> OrganizationChartNode {
    OrgTreeBuilder::new(employees, default_root).build()
}

pub struct OrgTreeBuilder<'a> {
    employees: &'a [Employee],
    default_root: &'a DefaultRootConfig,
    max_depth: u32,
    /// manager id (None = no manager) -> indices of direct reports, in input order
    children_of: HashMap<Option<&'a str>, Vec<usize>>,
    index_of: HashMap<&'a str, usize>,
    placed: Vec<bool>,
    /// Expanded nodes in visit order; a child always sits after its parent
    slots: Vec<Slot>,
    root_children: Vec<usize>,
}

struct Slot {
    node: OrganizationChartNode,
    children: Vec<usize>,
}

enum Step<'a> {
    Enter {
        index: usize,
        level: u32,
        parent: Option<usize>,
    },
    Leave(&'a str),
}

impl<'a> OrgTreeBuilder<'a> {
    pub fn new(employees: &'a [Employee], default_root: &'a DefaultRootConfig) -> Self {
        let mut children_of: HashMap<Option<&'a str>, Vec<usize>> = HashMap::new();
        let mut index_of = HashMap::with_capacity(employees.len());

        for (index, employee) in employees.iter().enumerate() {
            children_of
                .entry(employee.reports_to_id.as_deref())
                .or_default()
                .push(index);
            index_of.entry(employee.id.as_str()).or_insert(index);
        }

        Self {
            employees,
            default_root,
            max_depth: DEFAULT_MAX_DEPTH,
            children_of,
            index_of,
            placed: vec![false; employees.len()],
            slots: Vec::with_capacity(employees.len()),
            root_children: Vec::new(),
        }
    }

    /// Limit the chart depth; never below 1 so the root's reports are always listed
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    pub fn build(mut self) -> OrganizationChartNode {
        let employees = self.employees;
        let default_root = self.default_root;
        let top = employees.iter().position(|e| e.role == EmployeeRole::TOP);

        let (mut root, root_id, primary_key) = match top {
            Some(index) => {
                self.placed[index] = true;
                let employee = &employees[index];
                let id = employee.id.as_str();
                (OrganizationChartNode::from_employee(employee, 0), id, Some(id))
            }
            None => {
                debug!("No chief executive on record, synthesizing root '{}'", default_root.id);
                let root = OrganizationChartNode::synthesized(default_root);
                (root, default_root.id.as_str(), None)
            }
        };

        let mut path: HashSet<&'a str> = HashSet::new();
        path.insert(root_id);

        let primary = self.children_of.get(&primary_key).cloned().unwrap_or_default();
        self.attach_below_root(&primary, &mut path);

        // Employees whose manager is missing or absent from the directory
        for index in 0..employees.len() {
            if !self.placed[index] && self.is_orphan(index) {
                self.attach_below_root(&[index], &mut path);
            }
        }

        // Whatever is left hangs off a cycle the root cannot reach. Start from
        // the cycle itself so employees reporting into it stay below their manager.
        for index in 0..employees.len() {
            if !self.placed[index] {
                let entry = self.cycle_entry(index);
                warn!(
                    "Employee '{}' is only reachable through a reports-to cycle; attaching below root",
                    employees[entry].id
                );
                self.attach_below_root(&[entry], &mut path);
            }
        }

        root.children = self.assemble();

        debug!(
            "Built organization chart rooted at '{}' with {} nodes from {} employees",
            root.id,
            root.node_count(),
            employees.len()
        );
        root
    }

    fn is_orphan(&self, index: usize) -> bool {
        match self.employees[index].reports_to_id.as_deref() {
            None => true,
            Some(manager) => !self.index_of.contains_key(manager),
        }
    }

    /// Walk up the reports-to chain from an unplaced employee until an
    /// employee repeats; that one sits on the cycle.
    fn cycle_entry(&self, index: usize) -> usize {
        let mut seen = HashSet::new();
        let mut current = index;
        while seen.insert(current) {
            let manager = self.employees[current]
                .reports_to_id
                .as_deref()
                .and_then(|id| self.index_of.get(id));
            match manager {
                Some(&manager) if !self.placed[manager] => current = manager,
                _ => break,
            }
        }
        current
    }

    /// Depth-first expansion of `indices` (and their reports) as root children.
    /// Uses an explicit work stack, so chain length never touches the call stack.
    fn attach_below_root(&mut self, indices: &[usize], path: &mut HashSet<&'a str>) {
        let employees = self.employees;
        let mut stack: Vec<Step<'a>> = indices
            .iter()
            .rev()
            .map(|&index| Step::Enter { index, level: 1, parent: None })
            .collect();

        while let Some(step) = stack.pop() {
            let (index, level, parent) = match step {
                Step::Leave(id) => {
                    path.remove(id);
                    continue;
                }
                Step::Enter { index, level, parent } => (index, level, parent),
            };

            let employee: &'a Employee = &employees[index];
            let id = employee.id.as_str();
            self.placed[index] = true;

            let mut node = OrganizationChartNode::from_employee(employee, level);
            let slot = self.slots.len();
            let reports = self.children_of.get(&Some(id)).cloned().unwrap_or_default();

            if !path.insert(id) {
                warn!(
                    "Reports-to cycle detected at employee '{}' (reports to {:?}); branch truncated",
                    id, employee.reports_to_id
                );
                node.cycle_truncated = true;
            } else if level >= self.max_depth && !reports.is_empty() {
                path.remove(id);
                let hidden = self.hide_reports(id);
                warn!(
                    "Chart depth limit {} reached at employee '{}'; {} employees below not shown",
                    self.max_depth, id, hidden
                );
                node.depth_truncated = true;
            } else {
                stack.push(Step::Leave(id));
                for &child in reports.iter().rev() {
                    stack.push(Step::Enter {
                        index: child,
                        level: level + 1,
                        parent: Some(slot),
                    });
                }
            }

            self.slots.push(Slot { node, children: Vec::new() });
            match parent {
                Some(parent) => self.slots[parent].children.push(slot),
                None => self.root_children.push(slot),
            }
        }
    }

    /// Mark everybody below `id` as placed without emitting them; returns how many
    fn hide_reports(&mut self, id: &'a str) -> usize {
        let employees = self.employees;
        let mut hidden = 0;
        let mut pending = self.children_of.get(&Some(id)).cloned().unwrap_or_default();

        while let Some(index) = pending.pop() {
            if self.placed[index] {
                continue;
            }
            self.placed[index] = true;
            hidden += 1;
            if let Some(reports) = self.children_of.get(&Some(employees[index].id.as_str())) {
                pending.extend(reports);
            }
        }
        hidden
    }

    /// Nest the flat slots bottom-up; children always have higher slot numbers
    fn assemble(&mut self) -> Vec<OrganizationChartNode> {
        let slots = std::mem::take(&mut self.slots);
        let (mut nodes, links): (Vec<Option<OrganizationChartNode>>, Vec<Vec<usize>>) = slots
            .into_iter()
            .map(|slot| (Some(slot.node), slot.children))
            .unzip();

        for slot in (0..nodes.len()).rev() {
            let children: Vec<OrganizationChartNode> =
                links[slot].iter().filter_map(|&child| nodes[child].take()).collect();
            if let Some(node) = nodes[slot].as_mut() {
                node.children = children;
            }
        }

        self.root_children
            .iter()
            .filter_map(|&slot| nodes[slot].take())
            .collect()
    }
}
