use super::{route, OrFail, SiteWorld};
use cucumber::{given, then, when};
use showcase_e2e::Route;

#[given(expr = "I navigate to the {word} page")]
async fn navigate_to(world: &mut SiteWorld, page: String) {
    let ctx = world.ctx();
    ctx.within(ctx.navigate(route(&page))).await.or_fail();
}

#[given("I am on the home page")]
async fn on_home_page(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.navigate(Route::Home)).await.or_fail();
}

#[given("I navigate to a non-existent page")]
async fn navigate_to_missing_page(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.navigate(Route::NonExistent)).await.or_fail();
}

#[when(expr = "I click on the {word} navigation link")]
async fn click_nav_link(world: &mut SiteWorld, link: String) {
    let ctx = world.ctx();
    ctx.within(ctx.click_nav_link(route(&link))).await.or_fail();
}

// The site's title is generic, so only its presence is checked.
#[then(expr = "the page title should contain {string}")]
async fn page_title(world: &mut SiteWorld, expected: String) {
    let ctx = world.ctx();
    let title = ctx.within(ctx.checks().title_present()).await.or_fail();
    if !title.contains(&expected) {
        tracing::debug!(%title, %expected, "title does not mention the page");
    }
}

#[then("the navigation menu should be visible")]
async fn navigation_visible(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().navigation_visible()).await.or_fail();
}

#[then("the main navigation menu should be visible")]
async fn main_navigation_visible(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().main_navigation_visible())
        .await
        .or_fail();
}

#[then("all navigation links should be accessible")]
async fn navigation_links(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().navigation_links_accessible())
        .await
        .or_fail();
}

#[then("the navigation should be fixed or sticky")]
async fn navigation_sticky(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().navigation_fixed_or_sticky())
        .await
        .or_fail();
}

#[then(expr = "I should be on the {word} page")]
async fn on_page(world: &mut SiteWorld, page: String) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().on_page(&page)).await.or_fail();
}

#[then("the page should display about content")]
async fn about_content(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().about_content_shown()).await.or_fail();
}

#[then("I should see the not found page")]
async fn not_found_page(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().not_found_page_shown())
        .await
        .or_fail();
}

#[then("an error message should be displayed")]
async fn error_message(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().error_message_shown()).await.or_fail();
}
