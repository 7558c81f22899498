use super::{count, OrFail, SiteWorld};
use cucumber::{then, when};
use showcase_browser_test::Selectors;

#[when("I scroll to the bottom of the page")]
async fn scroll_to_bottom(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.scroll_to_bottom()).await.or_fail();
}

#[when("I scroll to the footer section")]
async fn scroll_to_footer(world: &mut SiteWorld) {
    let ctx = world.ctx();
    let footer = Selectors::footer();
    ctx.within(ctx.scroll_into_view(&footer)).await.or_fail();
}

#[then("the footer should be visible")]
async fn footer_visible(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().footer_visible()).await.or_fail();
}

#[then("the footer should contain copyright information")]
async fn footer_copyright(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().footer_has_copyright()).await.or_fail();
}

#[then("the footer should contain company information")]
async fn footer_company_info(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().footer_has_company_info())
        .await
        .or_fail();
}

#[then("social media icons should be displayed")]
async fn social_icons(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().social_icons_shown()).await.or_fail();
}

#[then("social media links should be clickable")]
async fn social_links_clickable(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().social_links_clickable())
        .await
        .or_fail();
}

#[then(regex = r"^at least (\w+) social media links? should be present$")]
async fn social_links_at_least(world: &mut SiteWorld, min: String) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().social_links_at_least(count(&min)))
        .await
        .or_fail();
}
