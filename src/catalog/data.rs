//! The built-in component catalog.
//!
//! Entries are defined statically; their popularity metrics are generated once
//! at load time from a seedable RNG so a fixed seed reproduces the same
//! catalog.

use crate::domain::{Category, ComponentEntry, PropSpec};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Creation dates fall within this many days before `now`.
const MAX_AGE_DAYS: i64 = 30;

const DOWNLOADS: std::ops::Range<u64> = 100..5100;
const STARS: std::ops::Range<u64> = 10..210;

const BUTTON_USAGE: &str = r#"import { Button } from "@/components/ui/button"

export function ButtonDemo() {
  return (
    <Button variant="outline">Button</Button>
  )
}"#;

const BADGE_USAGE: &str = r#"import { Badge } from "@/components/ui/badge"

export function BadgeDemo() {
  return <Badge>Badge</Badge>
}"#;

const CARD_USAGE: &str = r#"import {
  Card,
  CardContent,
  CardDescription,
  CardFooter,
  CardHeader,
  CardTitle,
} from "@/components/ui/card"

export function CardDemo() {
  return (
    <Card>
      <CardHeader>
        <CardTitle>Card Title</CardTitle>
        <CardDescription>Card Description</CardDescription>
      </CardHeader>
      <CardContent>
        <p>Card Content</p>
      </CardContent>
      <CardFooter>
        <p>Card Footer</p>
      </CardFooter>
    </Card>
  )
}"#;

const AVATAR_USAGE: &str = r#"import { Avatar, AvatarFallback, AvatarImage } from "@/components/ui/avatar"

export function AvatarDemo() {
  return (
    <Avatar>
      <AvatarImage src="https://github.com/shadcn.png" alt="@shadcn" />
      <AvatarFallback>CN</AvatarFallback>
    </Avatar>
  )
}"#;

const DIALOG_USAGE: &str = r#"import {
  Dialog,
  DialogContent,
  DialogDescription,
  DialogHeader,
  DialogTitle,
  DialogTrigger,
} from "@/components/ui/dialog"

export function DialogDemo() {
  return (
    <Dialog>
      <DialogTrigger>Open</DialogTrigger>
      <DialogContent>
        <DialogHeader>
          <DialogTitle>Are you absolutely sure?</DialogTitle>
          <DialogDescription>
            This action cannot be undone.
          </DialogDescription>
        </DialogHeader>
      </DialogContent>
    </Dialog>
  )
}"#;

const INPUT_USAGE: &str = r#"import { Input } from "@/components/ui/input"

export function InputDemo() {
  return <Input type="email" placeholder="Email" />
}"#;

const SELECT_USAGE: &str = r#"import {
  Select,
  SelectContent,
  SelectItem,
  SelectTrigger,
  SelectValue,
} from "@/components/ui/select"

export function SelectDemo() {
  return (
    <Select>
      <SelectTrigger className="w-[180px]">
        <SelectValue placeholder="Theme" />
      </SelectTrigger>
      <SelectContent>
        <SelectItem value="light">Light</SelectItem>
        <SelectItem value="dark">Dark</SelectItem>
        <SelectItem value="system">System</SelectItem>
      </SelectContent>
    </Select>
  )
}"#;

const SWITCH_USAGE: &str = r#"import { Switch } from "@/components/ui/switch"

export function SwitchDemo() {
  return <Switch />
}"#;

const TABS_USAGE: &str = r#"import { Tabs, TabsContent, TabsList, TabsTrigger } from "@/components/ui/tabs"

export function TabsDemo() {
  return (
    <Tabs defaultValue="account" className="w-[400px]">
      <TabsList>
        <TabsTrigger value="account">Account</TabsTrigger>
        <TabsTrigger value="password">Password</TabsTrigger>
      </TabsList>
      <TabsContent value="account">Account settings.</TabsContent>
      <TabsContent value="password">Change password.</TabsContent>
    </Tabs>
  )
}"#;

const RADIO_GROUP_USAGE: &str = r#"import { Label } from "@/components/ui/label"
import { RadioGroup, RadioGroupItem } from "@/components/ui/radio-group"

export function RadioGroupDemo() {
  return (
    <RadioGroup defaultValue="option-one">
      <div className="flex items-center space-x-2">
        <RadioGroupItem value="option-one" id="option-one" />
        <Label htmlFor="option-one">Option One</Label>
      </div>
      <div className="flex items-center space-x-2">
        <RadioGroupItem value="option-two" id="option-two" />
        <Label htmlFor="option-two">Option Two</Label>
      </div>
    </RadioGroup>
  )
}"#;

/// The static entries, without metrics.
fn static_entries() -> Vec<ComponentEntry> {
    vec![
        ComponentEntry::new(
            "button",
            "Button",
            Category::Inputs,
            "Displays a button or a component that looks like a button.",
            BUTTON_USAGE,
        )
        .with_props(vec![
            PropSpec::new("variant", "string", Some("default")),
            PropSpec::new("size", "string", Some("default")),
            PropSpec::new("asChild", "boolean", Some("false")),
        ]),
        ComponentEntry::new(
            "badge",
            "Badge",
            Category::Display,
            "Displays a badge or a component that looks like a badge.",
            BADGE_USAGE,
        )
        .with_props(vec![PropSpec::new("variant", "string", Some("default"))]),
        ComponentEntry::new(
            "card",
            "Card",
            Category::Layout,
            "Displays a card with header, content, and footer.",
            CARD_USAGE,
        ),
        ComponentEntry::new(
            "avatar",
            "Avatar",
            Category::Display,
            "An image element with a fallback for displaying user avatars.",
            AVATAR_USAGE,
        ),
        ComponentEntry::new(
            "dialog",
            "Dialog",
            Category::Overlays,
            "A window overlaid on either the primary window or another dialog window.",
            DIALOG_USAGE,
        ),
        ComponentEntry::new(
            "input",
            "Input",
            Category::Inputs,
            "Displays a form input field or a component that looks like an input field.",
            INPUT_USAGE,
        ),
        ComponentEntry::new(
            "select",
            "Select",
            Category::Inputs,
            "Displays a list of options for the user to pick from, triggered by a button.",
            SELECT_USAGE,
        ),
        ComponentEntry::new(
            "switch",
            "Switch",
            Category::Inputs,
            "A control that allows the user to toggle between checked and not checked.",
            SWITCH_USAGE,
        ),
        ComponentEntry::new(
            "tabs",
            "Tabs",
            Category::Navigation,
            "A set of layered sections of content, known as tab panels, that are displayed one at a time.",
            TABS_USAGE,
        ),
        ComponentEntry::new(
            "radio-group",
            "RadioGroup",
            Category::Inputs,
            "A set of checkable buttons, known as radio buttons, where no more than one of the buttons can be checked at a time.",
            RADIO_GROUP_USAGE,
        ),
    ]
}

/// Builds the built-in catalog with generated metrics.
///
/// With `seed` set, the metrics are reproducible for a given `now`; without
/// it the RNG is seeded from the OS.
#[must_use]
pub fn builtin_catalog(seed: Option<u64>, now: DateTime<Utc>) -> Vec<ComponentEntry> {
    let mut rng = seed.map_or_else(SmallRng::from_os_rng, SmallRng::seed_from_u64);

    let entries: Vec<ComponentEntry> = static_entries()
        .into_iter()
        .map(|entry| {
            let days_ago = rng.random_range(0..MAX_AGE_DAYS);
            let downloads = rng.random_range(DOWNLOADS);
            let stars = rng.random_range(STARS);
            entry.with_metrics(now - Duration::days(days_ago), downloads, stars)
        })
        .collect();

    tracing::debug!(entries = entries.len(), seeded = seed.is_some(), "catalog loaded");

    entries
}
