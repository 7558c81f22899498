use super::{count, OrFail, SiteWorld};
use cucumber::{then, when};
use showcase_browser_test::{class_contains, site, DomQuery as _, Selector, Selectors};
use showcase_e2e::CheckResult;
use std::time::Duration;

// Lightbox open and close animations.
const ANIMATION_SETTLE: Duration = Duration::from_millis(500);

#[then(regex = r"^(?:gallery images should be loaded|the page should load gallery images from service|images should be displayed in a responsive grid)$")]
async fn gallery_images_loaded(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().gallery_images_at_least(1))
        .await
        .or_fail();
}

#[then(regex = r"^at least (\w+) images? should be visible$")]
async fn gallery_images_at_least(world: &mut SiteWorld, min: String) {
    let ctx = world.ctx();
    let min = count(&min);
    ctx.within(async {
        ctx.checks().gallery_image_visible().await?;
        ctx.checks().gallery_images_at_least(min).await.map(drop)
    })
    .await
    .or_fail();
}

#[then("images should be arranged in a grid layout")]
async fn gallery_section(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().gallery_section_visible())
        .await
        .or_fail();
}

#[then("gallery section should be properly scrolled into view")]
async fn gallery_scrolled(world: &mut SiteWorld) {
    let ctx = world.ctx();
    let section = Selector::css(site::GALLERY_SECTION);
    ctx.within(async {
        ctx.scroll_into_view(&section).await?;
        ctx.checks().gallery_section_visible().await
    })
    .await
    .or_fail();
}

#[then("each gallery image should have valid source")]
async fn gallery_sources(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().gallery_images_have_sources())
        .await
        .or_fail();
}

#[then("each gallery image should have descriptive alt text")]
async fn gallery_alt_text(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().gallery_images_have_alt_text())
        .await
        .or_fail();
}

#[then(regex = r"^(?:all images should be properly sized|images should be properly scaled on mobile)$")]
async fn gallery_sizes(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().gallery_images_sized()).await.or_fail();
}

#[when("I click on a gallery image")]
async fn click_gallery_image(world: &mut SiteWorld) {
    let ctx = world.ctx();
    let image = Selectors::gallery().or(format!("img{}", class_contains("gallery")));
    ctx.within(async {
        ctx.page().click(&image).await?;
        tokio::time::sleep(ANIMATION_SETTLE).await;
        CheckResult::Ok(())
    })
    .await
    .or_fail();
}

#[then(regex = r"^(?:a lightbox should open|the image should be displayed in a larger view|the clicked image should be displayed enlarged)$")]
async fn lightbox_open(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().lightbox_open()).await.or_fail();
}

#[then(regex = r"^(?:lightbox )?navigation controls should be (?:visible|available)$")]
async fn lightbox_controls(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().lightbox_controls_visible())
        .await
        .or_fail();
}

#[then(regex = r"^(?:I should be able to navigate between images|pressing next button should display next image)$")]
async fn lightbox_next(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.click(site::LIGHTBOX_NEXT)).await.or_fail();
}

#[then("I should be able to close the lightbox")]
async fn close_lightbox(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(async {
        ctx.click(site::LIGHTBOX_CLOSE).await?;
        tokio::time::sleep(ANIMATION_SETTLE).await;
        CheckResult::Ok(())
    })
    .await
    .or_fail();

    // some themes keep the lightbox mounted but faded out
    if ctx.page().is_visible(&Selector::css(class_contains("lightbox"))).await {
        tracing::debug!("lightbox still rendered after close");
    }
}

#[then("pressing previous button should display previous image")]
async fn lightbox_previous(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().lightbox_previous_usable())
        .await
        .or_fail();
}
