// Shared fixtures for program-health integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Three programs: one complete, one bare, one with serious problems.
pub const PORTFOLIO_JSON: &str = r#"{
  "programs": [
    {
      "id": 1,
      "name": "Checkout Modernization",
      "description": "Move checkout onto the shared payments platform",
      "status": "active",
      "ownerId": 42,
      "startDate": "2026-01-01T00:00:00Z",
      "endDate": "2026-12-31T00:00:00Z",
      "objectives": ["Cut checkout latency in half"],
      "kpis": ["p95 latency"]
    },
    { "id": 2, "name": "Search Revamp", "status": "planning" },
    {
      "id": 3,
      "name": "Data Platform",
      "description": "Consolidate warehouses into a single lakehouse",
      "status": "active",
      "ownerId": 7,
      "startDate": "2025-09-01T00:00:00Z",
      "endDate": "2026-09-01T00:00:00Z",
      "objectives": ["Retire the legacy warehouse"],
      "kpis": ["Tables migrated"]
    }
  ],
  "risks": [
    { "id": 1, "programId": 1, "title": "Vendor SLA", "severity": "low", "status": "identified" },
    { "id": 2, "programId": 1, "title": "Fraud rules", "severity": "medium", "status": "in_progress" },
    { "id": 3, "programId": 3, "title": "Schema drift", "severity": "critical", "status": "identified", "impact": 5, "probability": 4 },
    { "id": 4, "programId": 3, "title": "Staffing", "severity": "high", "status": "identified" },
    { "id": 5, "programId": 99, "title": "Orphan", "severity": "critical", "status": "identified" }
  ],
  "milestones": [
    { "id": 1, "programId": 1, "title": "Beta", "status": "in_progress", "dueDate": "2026-09-01T00:00:00Z" },
    { "id": 2, "programId": 3, "title": "Cutover", "status": "in_progress", "dueDate": "2026-03-01T00:00:00Z" }
  ],
  "dependencies": [
    { "id": 1, "programId": 1, "title": "Payments API", "status": "on_track" },
    { "id": 2, "programId": 3, "title": "Identity service", "status": "blocked" }
  ],
  "adopters": [
    { "id": 1, "programId": 1, "teamName": "Mobile", "status": "in_progress", "readinessScore": 60 },
    { "id": 2, "programId": 3, "teamName": "Analytics", "status": "blocked", "readinessScore": 20 }
  ]
}"#;

pub const AS_OF: &str = "2026-06-15T09:00:00Z";

/// Write `contents` into a fresh temp dir, returning both so the dir outlives the test.
pub fn write_temp(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    (dir, path)
}
