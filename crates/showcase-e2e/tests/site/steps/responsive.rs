use super::{route, OrFail, SiteWorld};
use cucumber::{given, then, when};
use showcase_browser_test::{class_contains, site, Selector, ViewportPreset};

#[track_caller]
fn preset(name: &str) -> ViewportPreset {
    name.parse().unwrap_or_else(|e| panic!("{e}"))
}

#[when(expr = "I resize the window to {word} size")]
async fn resize(world: &mut SiteWorld, size: String) {
    let preset = preset(&size);
    let ctx = world.ctx_mut();
    let budget = ctx.config().step_timeout();
    showcase_e2e::within_budget(budget, ctx.set_viewport(preset))
        .await
        .or_fail();
}

#[given(expr = "I navigate to the {word} page with {word} viewport")]
async fn navigate_with_viewport(world: &mut SiteWorld, page: String, size: String) {
    let (route, preset) = (route(&page), preset(&size));
    let ctx = world.ctx_mut();
    let budget = ctx.config().step_timeout();
    showcase_e2e::within_budget(budget, ctx.navigate_with_viewport(route, preset))
        .await
        .or_fail();
}

#[then(regex = r"^(?:all |the )?(?:content|text) should be readable on (?:mobile|mobile devices|the current viewport)$")]
async fn content_readable(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().content_readable()).await.or_fail();
}

#[then(regex = r"^(?:cards should be properly formatted for mobile|pricing cards should be responsive|cards should be readable on mobile devices)$")]
async fn cards_fit(world: &mut SiteWorld) {
    let ctx = world.ctx();
    let cards = Selector::css(class_contains("card"))
        .or(site::PRICING_PLAN)
        .or(site::TESTIMONIAL);
    ctx.within(ctx.checks().cards_fit(&cards, ctx.viewport()))
        .await
        .or_fail();
}

#[then(expr = "the viewport should be {word} size")]
async fn viewport_is(world: &mut SiteWorld, size: String) {
    let expected = preset(&size).viewport();
    let actual = world.ctx().viewport();
    assert_eq!(actual, expected, "viewport is {actual}, expected {expected}");
}

#[when(expr = "I take a screenshot named {string}")]
async fn screenshot(world: &mut SiteWorld, name: String) {
    let ctx = world.ctx();
    ctx.within(ctx.screenshot(&name)).await.or_fail();
}
