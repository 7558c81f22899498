use super::{count, OrFail, SiteWorld};
use cucumber::{then, when};
use showcase_browser_test::Selectors;

#[then("the page should have an introduction section")]
async fn introduction(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().introduction_visible()).await.or_fail();
}

#[then(regex = r"^(?:the introduction section should be visible|the about section layout should be correct|all content should be properly rendered)$")]
async fn about_section(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().about_section_visible())
        .await
        .or_fail();
}

#[then("the page should display company description")]
async fn company_description(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().company_description_visible())
        .await
        .or_fail();
}

#[then("the section should display company description")]
async fn section_description(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().section_description_visible())
        .await
        .or_fail();
}

#[then("the section should display a tagline")]
async fn tagline(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().about_tagline_visible())
        .await
        .or_fail();
}

#[then("the section should display the company title")]
async fn company_title(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().about_title_visible()).await.or_fail();
}

#[then("the page should load introduction data")]
async fn introduction_data(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().introduction_data_loaded())
        .await
        .or_fail();
}

#[when("I view the features section")]
async fn view_features(world: &mut SiteWorld) {
    let ctx = world.ctx();
    let features = Selectors::feature();
    ctx.within(ctx.scroll_into_view(&features)).await.or_fail();
}

#[then(regex = r"^(?:feature blocks should be displayed|the page should load features data)$")]
async fn feature_blocks(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().feature_blocks_at_least(1))
        .await
        .or_fail();
}

#[then(regex = r"^at least (\w+) feature blocks? should be visible$")]
async fn feature_blocks_at_least(world: &mut SiteWorld, min: String) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().feature_blocks_at_least(count(&min)))
        .await
        .or_fail();
}

#[then("each feature block should have a title")]
async fn feature_titles(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().features_have_titles()).await.or_fail();
}

#[then(regex = r"^(?:each feature block should have descriptive text|feature block descriptions should wrap correctly)$")]
async fn feature_text(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().features_have_text()).await.or_fail();
}

#[then(regex = r"^each feature (?:block )?should have an icon(?: and description)?$")]
async fn feature_icons(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().features_have_icons()).await.or_fail();
}

#[then("feature icons should be visible")]
async fn about_icons(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().feature_icons_visible())
        .await
        .or_fail();
}

#[then(regex = r"^feature blocks should be aligned (?:in a grid|properly)$")]
async fn feature_layout(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().features_in_layout()).await.or_fail();
}

#[then("all feature titles should be readable")]
async fn feature_titles_readable(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().feature_titles_readable())
        .await
        .or_fail();
}

#[then("each feature block should have proper spacing")]
async fn feature_spacing(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().feature_blocks_spaced())
        .await
        .or_fail();
}

#[then("feature icons should be centered")]
async fn feature_icons_centered(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().feature_icons_centered())
        .await
        .or_fail();
}

#[then("introduction content should be properly formatted")]
async fn introduction_formatted(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().first_section_visible()).await.or_fail();
}
