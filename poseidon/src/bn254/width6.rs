//! Parameters for the state width 6 permutation (5 inputs).

use ark_bn254::Fr;
use ark_ff::MontFp;

pub const WIDTH: usize = 6;

pub const ROUNDS_PARTIAL: usize = 60;

pub const ROUND_CONSTANTS: [Fr; 108] = [
    MontFp!("9174141306060971809979631725764298697615039980311809306145004207410652431953"),
    MontFp!("4847693924685156250211477469465516228032151306221739650606132660616428517315"),
    MontFp!("19669833054057639609249840291533340493211768292967819468538893000195036768991"),
    MontFp!("19800508893433268850924828171290876015556093796000695603651522426066333836892"),
    MontFp!("8244699449852279148780456022144420353408196866113049322676048275081354214716"),
    MontFp!("1563672068712965454176533719400672258364596155638916268717470967009721945171"),
    MontFp!("9891052028732023409982118721521792456667038278903445323811685469175437712182"),
    MontFp!("12938825611601673385666239525131505028779787135258062039893685920937031284020"),
    MontFp!("14094005310684310762997154148841847787905253851819285187117075208365612094667"),
    MontFp!("19004378741482244571130440050308808957129721283054456111305057260497240294342"),
    MontFp!("6316013064160296696940780174113975059906394426230273885245745606860773292176"),
    MontFp!("16646526779686800785466675022661901184678484640402939669915629559865607416460"),
    MontFp!("7334063291451680015672320676435105908283015184912654180354900458964382166149"),
    MontFp!("15344852885602858307490591129206104439197353183283939043707405991501422420248"),
    MontFp!("20971704087000066255866208486662559480437110892652619168035094674699417773771"),
    MontFp!("16993262775403690734664855332412383932573727846154775929511091136793530624087"),
    MontFp!("13746865745370594901567154261774061124545326068066558556089789615972051336157"),
    MontFp!("7459901720219701075570518420970632926460891386835269924871635802750579908361"),
    MontFp!("10507725986709369026288790398659137487415164123682252913946728693519019910220"),
    MontFp!("8213414965016206096424241055537696154590867607657907931303840255077538243022"),
    MontFp!("3379614525511373050929948682769016030534856979227524928871120487764170513768"),
    MontFp!("3241280540046795783405796030042788002909309429873009124975930668286780284516"),
    MontFp!("19466401023144609496183092982520823883129508277210273410263788422403017476595"),
    MontFp!("3632672574607620925052871964081854649589341577804352974784646871182944143285"),
    MontFp!("9156340666178834227003081347153071555153633144597091057748497623570652641571"),
    MontFp!("12704874647744051179159089836119147081346454009698749872364866190075872270909"),
    MontFp!("15411255944540823328130928162810898235505202388975122125650009504299247405970"),
    MontFp!("646355724394682499673625642621993831117529873061273399476931445265632426606"),
    MontFp!("6775669704009818978320652496005587825248828821708204462343190425524079147115"),
    MontFp!("18145169608705706717755577892479403903459404885149831574397480559885250783097"),
    MontFp!("7188977040127944498031363566533633383276821017747557969522595227075010051989"),
    MontFp!("11010242445919931815767601895112823726486985631192090547463198292055987413413"),
    MontFp!("14487816477052352075145759828099714681235195213322637951397237171143455364725"),
    MontFp!("16223898718707623846667129820775161256457256527292624941078386484541510295097"),
    MontFp!("19844866906402122803103247424698737154975607096008259385377704182995036786659"),
    MontFp!("17555365215519225025999142006678840722215486890842811675476349791807786337534"),
    MontFp!("15274742627799381348316766746442830120541848735906269902113128019522315612088"),
    MontFp!("16479045651819930500002450662301150649152325030798848648592093494572400559213"),
    MontFp!("1624971964117494670499117204553267637999970806782527530107379525883304291984"),
    MontFp!("9167400453052213082006027249184027888569855458027435588969973452644786399983"),
    MontFp!("131784710611525980872154921615435182486729028838905788498248456052389871389"),
    MontFp!("16346241212019315345984208673606972880882771779344551764516665913790174215723"),
    MontFp!("12956332686467457903834998384295243287182787154988437406090631623240586125354"),
    MontFp!("4754956500481353232949462667970600532952984886323405315934011205221496629739"),
    MontFp!("12819686560600613709134361854928194415538030370080174852887162221074128510170"),
    MontFp!("4043742524100663890709933962243205553494338392593215247946162242285082753826"),
    MontFp!("2283595527879667122024990035189002061459217732766000824721321978731476690022"),
    MontFp!("5324975257477503304007976614415165114589977031459282647671749449175895805198"),
    MontFp!("7531535027614672320094703077148945032313547814517933364229353080349423006678"),
    MontFp!("11824213629184621492648287498239338025257465524557411497940329785103559679411"),
    MontFp!("2661208347905292558904002668765113763157319346806931119652432829238954324414"),
    MontFp!("13984308253000125793838476088488792048372723512491772206247221019002032788652"),
    MontFp!("2095802684084866726332090765083542673423276153554183116525609545553691346097"),
    MontFp!("2811905193270870898656592984053580454359215580291859047750849356764627338970"),
    MontFp!("352296780545142790022399530792299840880431578920430654301233736856720732495"),
    MontFp!("16754725837762787619052728693611641723156082635765690099142028033402418666849"),
    MontFp!("12293821253243613835005102536785311028399273826110103814121164348978611006279"),
    MontFp!("11213357300328923041829691026589297762959252538380243266401722927156711656963"),
    MontFp!("12375422843999155996251090917831098480091985966992243226951451227717000871584"),
    MontFp!("2786845438308042301160991134864456112146843598969925676999939406257329430702"),
    MontFp!("19945290191283883566352105272994804917931968896512441025049934423249657770579"),
    MontFp!("7131617086306308944712357979620815600122308835077841398920715655575044828848"),
    MontFp!("1570259321972263547291164644389421255655923586296738784234163856077242880879"),
    MontFp!("1055189538847640278185405605516009542030286194797535068521159872324278812063"),
    MontFp!("2326090237674655725098216743964330392842023745715875972622114738780654757977"),
    MontFp!("12314208556676002345810361013009953786023639961616889254514037074467053303274"),
    MontFp!("8154518924735983610654650365160674002549036076947007625631582802609147160063"),
    MontFp!("11874439926184177852212724823767967491755292100555741860735602221021194004066"),
    MontFp!("6929855327363587601194205624588868796661282222321761606022037944557532266212"),
    MontFp!("17727298278963172469307072480217676729387770916885312950475329155014363562351"),
    MontFp!("19210857337835410664165291122735937698604022747167744303106082056400241190293"),
    MontFp!("20350362367877110993560610440065977537300876415108054412369759899296478273716"),
    MontFp!("710897050225338898834650409641648587778749419875305751052136529138738484906"),
    MontFp!("11590438983990983988739367922367363679854784036635942493172934827332281377379"),
    MontFp!("17626018803599245797367654018942682416146646707819712394228234615410726317833"),
    MontFp!("16646994182109171828645131646927117661878899269650605854220308333550345834690"),
    MontFp!("11004799160050505759526320952524969619992674384288165438640400796210193323832"),
    MontFp!("76244227009333383011259508789558113239002820522085043425816333144097009339"),
    MontFp!("21769181433388798075524240176489417766216852964384675769552263924939422629962"),
    MontFp!("149685787231167893349461507705377047126933967800746148616117448498575185679"),
    MontFp!("2180070055164476060745579716202475636708043423062244171410088168803265859580"),
    MontFp!("20196183872968781008430526980881258286058018375763301858597837129783684468121"),
    MontFp!("19153326171227480891169677754199972148812702563263416896069516937464551139123"),
    MontFp!("4785795027536159389709498482716579943237482403495668600041822530413072096657"),
    MontFp!("20444935484286592420147178195610453159594573590579660088054622877447385663485"),
    MontFp!("1745451451566561613923597734902279603691669319309612892957907518836737450378"),
    MontFp!("15503080550497382898604587296398829049408772366416910530772333069393963791796"),
    MontFp!("12745015722754008028020483504031179729178734834547104117733707723698761557639"),
    MontFp!("2255092598389555346450279257729382679114231822312270568889933268245051222349"),
    MontFp!("12068866873249153010449861014167643825839741241700184152840759030136846347559"),
    MontFp!("621030717534810514415862675775677120131621582171839192573630942391039419411"),
    MontFp!("2714154467450167382934129892386835835241546889578708726985335813705230313842"),
    MontFp!("9716171878380338508723651374484552681893467669749450921648144551020260645328"),
    MontFp!("3868943248854127829693279703180522046986514007155119300946301312058325658620"),
    MontFp!("4497043581654687389348588522162158448937884103803938329701255727911017190142"),
    MontFp!("2600763217150780996250345035352047694712261163272677702491147412558759270307"),
    MontFp!("18563324594837483605694867556849841078503541398581432176091341748376245060126"),
    MontFp!("4479182415968258811036281017807348108344578892769976083772709282107444769935"),
    MontFp!("3340440796601312982566163108957988139989713383160379394506442182105851248697"),
    MontFp!("7866209340533391619188093376016335659188380685804559288602968632750741577797"),
    MontFp!("7296912920155000917389123377830562726587472759085785565358384647190018164980"),
    MontFp!("2117068470011266081246385842983102879392848685774624027663830682556312565407"),
    MontFp!("19126320724132408746115559476767279717642639597833265961565039329422205715001"),
    MontFp!("19745857727758827228546159087587814061557931356589771432333849435169145891270"),
    MontFp!("5606364174637805822646428195305184850366167553493472221586572716950233016755"),
    MontFp!("18802212104810171401196395190536625834820253804675093615546175064402217855756"),
    MontFp!("18925363938716051134627959420104552127284891988469368007743506389901419242637"),
    MontFp!("16749249254314374757412573314152878126637334341211394046433405038844203845100"),
];

pub const SPARSE_MATRICES: [Fr; 660] = [
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("197309756657018823966677479341273828824758597703662956305610692740899565673"),
    MontFp!("17959482193875857615667210795513805128299859033639951431441551770512382623172"),
    MontFp!("7148919930056684298369787610981409217017116742346156536091323210124700107348"),
    MontFp!("974491958384056075427990256232777432876441828365723982650851662956203682079"),
    MontFp!("1962364914528120227281488172905488716830858983311046200184067562467859304433"),
    MontFp!("1308822470019737546816257600517832958243704317258507351664941412246748126620"),
    MontFp!("19936998530779675159789298312289950077225772916308616338719094030721364060363"),
    MontFp!("2479630203500607924210973626499167334075638392848059016472773581677645952675"),
    MontFp!("20386740544594521237735753626518784396151276432410389135010601867809707980975"),
    MontFp!("11897551866537566007628812959723633366452272300231639849333871545932349834977"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("12080327756591077530922299928382356522390520088781545283263770426205717259623"),
    MontFp!("9180266151128652816649129795465432523505704192359167429269652769289066655145"),
    MontFp!("14482048313196616622698028099880456013917238312111374384919988419948560215"),
    MontFp!("9233137023031341839570481699628532648335849660085688673068938108616507526878"),
    MontFp!("7743226217572434809288089664767270865431885636695158790449985062391891214930"),
    MontFp!("19828382529084122050942462830859597651706413024794988481226164020661009377973"),
    MontFp!("15006251584444133223548338150918235857591997880000846337397900041172226553536"),
    MontFp!("17395105865660997623648534528466225256334093522790084452195086677823988955548"),
    MontFp!("9924388123461205384887961342435720811081754432426297932317400420615540547007"),
    MontFp!("16688874062922801811055815110464920123065086122752918995598770339897488837671"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("2360354710986741349291393269630306885249841944586229890362654826762566267432"),
    MontFp!("16300092200081865803857770531571890813501037381597170935512592166098065752241"),
    MontFp!("8532179120730616843736952756168832744941278208139198087210364487146012392330"),
    MontFp!("11444148445470456408073816913509866941945437371762056695403362344042760313367"),
    MontFp!("364185755389488320934297940034775658046875007783340751668810368855567472822"),
    MontFp!("5110182398768852920628732682344302804896820956153734924849146620799296752872"),
    MontFp!("18179360773806298233854892722767947030562647258846896554872912373567007985644"),
    MontFp!("8035583748592612636134251923756695855120739770178907246271960494297039823169"),
    MontFp!("5882303493788650805292524814697712586443750862324111649902819137041020335998"),
    MontFp!("18088038841927624634066108195749007342895395736550214790141827249162171120968"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("19289794073856442987472268734814581202254476945776489639168218746583799170126"),
    MontFp!("7516332915981678401815379091908293864043228827676946779354053719453030916231"),
    MontFp!("12836976480380371397082535209638834478582180028580822324315328146406024593676"),
    MontFp!("5673928239171935935863415943262991347445786863509001914367343601086907775773"),
    MontFp!("13093129137134172910341583530968909571831987185792033597263878537423570774505"),
    MontFp!("6714221131224045796640835222652642746764730302077616441074965853238523460390"),
    MontFp!("17078627315589603624970546550864659635253494720868737003222605642237370752201"),
    MontFp!("9067786255862747069764999599211706656312494116289157387426732643193543198752"),
    MontFp!("11636006256690329554846739902932231519964249798717514972629506023319413730571"),
    MontFp!("9224065955990578457964165042094526343732169782102321730186156472313495304518"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("21652770029124147844808220263615715886566088197798132803854739665662838593802"),
    MontFp!("15022880439038026041926838708931727942875578659553576466228088452504641526254"),
    MontFp!("19967168801202829751393578376478205501097269903001429096112902586784164518462"),
    MontFp!("1524565166609980525457868339107316497690861082400864206380408415076407695190"),
    MontFp!("16576725385723744550599140221980684980573066278713934545479331398756771865517"),
    MontFp!("18935044128495346495833126480853457851126909446504554743231204170848499198545"),
    MontFp!("10468490612770394064625052458132369592185912174077465783608637031295605349260"),
    MontFp!("12195858258881244581924774664076455714987504231805333731227924608103833465155"),
    MontFp!("17923733042996835892720425571474134585357431735083713530484224911100787146160"),
    MontFp!("13258356731677237670003815692073982604943586174055805839128440062716136005138"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("7179182344170769386460667767505352218166782757937391682505040181841099996143"),
    MontFp!("18262779678801465305053964305338482888690971689734213991564530666799082646044"),
    MontFp!("18354604679819936300023816630195260468095390373187961929513730721777182747401"),
    MontFp!("11407702387246779268828352694885697510831388763365124799892828677853181530927"),
    MontFp!("6485272817895183471154563974728973221603595351441836074498788072174610890129"),
    MontFp!("20072895655216963210249991625707667388097967342269035726339227714398392301339"),
    MontFp!("4062527869675331919506972666123656037567646677992577996469060526667962384180"),
    MontFp!("8557117213815816086566791530361382584239841999879283362069348276990777346"),
    MontFp!("5598768693400673915005042631235880807354469518942585727482375581450392079700"),
    MontFp!("13937474028453925107540338953381187738082413596172106793811561908458050572437"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("19558061995203282701893941468694162156891688209686202319571635179880439364459"),
    MontFp!("11744474241153461883234667050038936280775900744563905180282522939708893713498"),
    MontFp!("149809251906595426601871035243800841880390712087312523285589295682748258265"),
    MontFp!("14771454383718953427809513367291273974331223248560130798480812678470450694684"),
    MontFp!("11911999089716419758361392891355127087049041706317714934437958957703306523130"),
    MontFp!("2878766367320353997860999655974440542790020118073818380684960194032378232625"),
    MontFp!("17878870954381162255512532409090386614268432882297415364820467706182403608363"),
    MontFp!("4422283786077417587131113210606565101453182321085411649344796673560003476576"),
    MontFp!("4410883287285069327928958511557992490333486481292157240614954533389151383413"),
    MontFp!("15811479575427277435665853317793524146503630093216102619647394749760154092850"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("6849806216221316890514437858215528431620919832387886124865562995832243860990"),
    MontFp!("6887011738613521375317089714862316270666862425410369284013482005873032256662"),
    MontFp!("5090455388766232096745616556178447221674680871713528687110682943526077949669"),
    MontFp!("2759779739499788464157905294637813036916990200521780233740432669989664170421"),
    MontFp!("18260054926450231272424948826562049145807700385515513986822611557856912079751"),
    MontFp!("3766604707766413233617637761507213611529682385181463011014440353627044506417"),
    MontFp!("5027060999581474069591555391790144125786207529823082362574895524432189962907"),
    MontFp!("17716839444634777027150254705193326596436925333938405160089421297487671240366"),
    MontFp!("20126072975475893974576255614092232080600802726499428051722615788801770435131"),
    MontFp!("7679311052177446507949737094646752714216613775679133441253574113489967318280"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("75691409111202181628867180422351240048143090020849750134127671202796272729"),
    MontFp!("13431980569987105652833273180970125458326694146888904681292229769362212571187"),
    MontFp!("19593748832466339575075141041996771565144081787078800633836190732403923999224"),
    MontFp!("19784366457704135095220751871564846284179557479617682134448257801025467101011"),
    MontFp!("1500818457432227707331169058571198973418548282660505757214952933391456496674"),
    MontFp!("14965382075372389550700310222333061498538637869338118109069499518625040085568"),
    MontFp!("6910385645893141394833518707462158571567831015734724353792913141611360173507"),
    MontFp!("3874558252634887877464865707122559485416604860309756044433970534581229807796"),
    MontFp!("9193845175621429625294272252984754540961410836037794291289816813733683557454"),
    MontFp!("6315807625688627187311121382297464373874333529031436379156970979729586471366"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("3754513485894497252273556446989778498381007597049662074393014122486405193889"),
    MontFp!("15404937109341686460084667376596592362090930163839285832234231818999983859041"),
    MontFp!("4448980053761501146101334411932893430002398593704542799649135107422026257501"),
    MontFp!("21402173976445295367295798104969851368838469360611190405237353316712070326619"),
    MontFp!("18989207589660267110549045413163850168088114518081519042752789748452100545281"),
    MontFp!("16658527205288597019133306179824193608747549440591512966795766713930086271883"),
    MontFp!("1268035779083766523375087960115317445652000441416456116392762634111994418613"),
    MontFp!("20935228935982913081655091940183100529065066577650570715701906656496692320531"),
    MontFp!("5988635713795175336427542187097616315072222182232922767092568254307121982225"),
    MontFp!("20178260063030855492104591164913845353417851274051977984061315083034322833195"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("6874911804276789372563901796506688642195780271485640867974271881767938011518"),
    MontFp!("12344899495878737646873241096529687681475956124751797982216183751978574132320"),
    MontFp!("19361330917685745099029889265423429686715075513622102782972820069780505692156"),
    MontFp!("12754056749360083305207431757624623651433634401778733082193304064392601338687"),
    MontFp!("11506716967669372802902889657971610131501289786493708296620525933099167405197"),
    MontFp!("3363731235349548018588983093994353108246040982138112186315996291232752633515"),
    MontFp!("1757046205876894600522459621185156488096656282796325961756237898071473966138"),
    MontFp!("19505204762408791906271448673269308542857950621769109910589592394833019461482"),
    MontFp!("8339242395309802326952257441217781873070057200640446220201095090408472038559"),
    MontFp!("3532479628287941399682825689822374146933111262299573987019600706317810181498"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("11069707054957222445785767184434832883684297125387213451748233682496576446611"),
    MontFp!("2594546799111202868698074241831567975433550029325306835720325788050330083004"),
    MontFp!("12057580472147779453888751944350735642281029113958641120279404683040620408762"),
    MontFp!("18438485360514958127734240716194279834725246999647159499044852677837186100255"),
    MontFp!("1257942120048723079382339847556365462251249241543873867091916219089795825429"),
    MontFp!("8331391831953144591222569251856835393453128108438302077878769258291310475718"),
    MontFp!("16719887111505545065844529522012578164691505576352662999559912904173569677185"),
    MontFp!("10939859846706805251321488154725106755792164414473828288162439860479161004095"),
    MontFp!("6635387980521871216658439193386204290348856792700123146159094951617324698557"),
    MontFp!("14507567372666245384048400288073339417256882297373057792176072448552697507949"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("9054323241516636514752792519151581202693871650554155376452161780876525137547"),
    MontFp!("19392394906724443787335080896018123236696094611822072315263304090855161222329"),
    MontFp!("14568793873996547500827770317179159785833223479042030380892898240055654037704"),
    MontFp!("16365908891989958512697286672702727194751130140538476664640049337588179685526"),
    MontFp!("7676070887712936525141645459706777021512530813761320185956746525956280989201"),
    MontFp!("2637631073443421830495040289756733210870555289179132196445970828375920428057"),
    MontFp!("14810456799392542188518969505534451623921509177050722922633333758591385037512"),
    MontFp!("1615345811094845813597124919483775862239680987803938623356105275501381141760"),
    MontFp!("2721545918710589755768441948369792795548850085114307137924301983273115614268"),
    MontFp!("16111433812912341116456681892321150169893676382784144219949717295323375308402"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("4083573611041294385724778535633927745819448063759991448569890193243443609299"),
    MontFp!("5898843197685130008038751248832770647157466300149168706365745273953471898729"),
    MontFp!("986838523749239134343257400794232185875122948160788869561728923787400423663"),
    MontFp!("10240642299829996754485849609046587825533072735700031395383925211656693854400"),
    MontFp!("8995659268812097874605273566466855529573309425896185817445979407387169041782"),
    MontFp!("8079548219457637918336292985883721514318962512418550273330456627380898635908"),
    MontFp!("9160523927437036161959362389587806417496954913091329479081236822973440236657"),
    MontFp!("4101146931687909047683977936093217369874365517782089267950914250597259557530"),
    MontFp!("20153884135213149303145691239006129692079677934279188457823474403711719134288"),
    MontFp!("2978329626302401686075782441837339167513611052812380980958550011973727203680"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("14342139892453353347153282530705798247624328173761713098764009188383786856181"),
    MontFp!("16734923922416165156664724365374872152351757772263323778914962075568155081306"),
    MontFp!("10317418131314639045964401482325421345805380697932780242759193693322529958373"),
    MontFp!("7852649247838906181402025717563095453864028231863221633273951967820734658676"),
    MontFp!("9738428954616883303449159847119335256835576431194629265598244134537328159917"),
    MontFp!("14656850322842050313103629344758539566805540145804037103078752306089307275292"),
    MontFp!("7174636230188126029868158510227984834937225729537622921150803162329546597969"),
    MontFp!("11725136632229836773624441687175330972467575879694017778297008514203075000220"),
    MontFp!("11648678407517894878128289838881804081459117871472152789682684013514885781288"),
    MontFp!("19487548851435379473829373743641476823161013997047105205734650809572155681031"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("182933331509958318413426980917501914978305478243084524218090670393405988724"),
    MontFp!("16664909366478801198389287194024423666465826243617107452638035116877893850609"),
    MontFp!("11187340438786037317342671762858968737622157379965968556765586757141596387663"),
    MontFp!("6132883503219416495212932734765102482872071593691265503169926795518973687718"),
    MontFp!("3779316206478680045328104834372262547089501428534886416868196041439788678496"),
    MontFp!("18867981860256972696007482556105804596983776453086250299754258805522180825362"),
    MontFp!("2951933987054664575091018427038053722954909034418841545726398781138062729721"),
    MontFp!("12886847634171765160034949424570781347845559224432823623733427044838755558586"),
    MontFp!("1902408954814561829813878899349508837372740603610462028469291141143844764844"),
    MontFp!("17525743867966074472668684660444343893637528531754580373366181926398656722221"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("16601596445788072696460381464390607919371443191054142494274897607920599131824"),
    MontFp!("11588421087513849339246154411122218412623963157517219843444638823595325998863"),
    MontFp!("19828269061061954639629960935497085433573400263143743782655652955686896996362"),
    MontFp!("10435868850216773557702046174999159123501696294126839240473162599110493518691"),
    MontFp!("18601481594908566583320443886788551312722175686076307983363393277113357324897"),
    MontFp!("1340480791097814316297074244922213952384249949607197440036772485362436025916"),
    MontFp!("8140578777648138589511923119464599585837184102701485177105690278910341958119"),
    MontFp!("6188250274649278519904819585448155704749100866093908044959002659829729364782"),
    MontFp!("15472266311495380711068462445880641046910149481970325917886298630208473973599"),
    MontFp!("10020912298630850625343048984913049339286543211573300322745441345434690687602"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("5331189595302286163896574738605056591264660245152165891363270649287737232511"),
    MontFp!("660976445641543295520063642597748459380492218817424329276840982557362816263"),
    MontFp!("1665089997100007640110762278908311678461309305425700405408977307919826368308"),
    MontFp!("826286431560895636367689340823950853351729937911612325811716219618629688082"),
    MontFp!("12619767094339577084033937255501353486249544235185578949488020933050007984188"),
    MontFp!("5994268702615793101221883948134307918586899924478834052785678607748521202111"),
    MontFp!("14682206022683026905929682562264624381444208061034877265902001409918181027136"),
    MontFp!("13438063656377720357978344151924801749420790187495198307566589696376942328555"),
    MontFp!("9053654415414550724373670959185650446926112097180219009925219984293299960324"),
    MontFp!("15284026238341506112348137677920669147603271457869172995667655062372939842282"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("14865735277431021576539755889231037674290269739512805513060442434666962231980"),
    MontFp!("10939971788407211597388882632231878959811427013641367814692425116464764207415"),
    MontFp!("18455560243378318359891975600338946372751006002716106279003062219134571615413"),
    MontFp!("2103983542602559681655807741475198318026687944660085013964352134545093009303"),
    MontFp!("14079204533404977689327888313340977212607551307308538782605967266848716058757"),
    MontFp!("7462504765902575720601670591086596050132697782108778877227586200896842449997"),
    MontFp!("14950717191589797654753396287118634334815125769221973408884338641473313589433"),
    MontFp!("17889056289761432053771140393692198274656640100592604606366688179328939838850"),
    MontFp!("5252338666126288994602244057729920246173922851722353507342306009763842593839"),
    MontFp!("19282041207579803223472469725424776345619072231470590760269917003233689582250"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("8093443454951824670231792941623861941022135253195556356781290466360519217612"),
    MontFp!("15985626040278092816680952826645384904346550482218790457808483905959805922893"),
    MontFp!("9131788751209910784315688316523646654684845994854030620275092602459010086768"),
    MontFp!("11878206959461123695348908429124455172707437556912268556516400978835361174953"),
    MontFp!("17213464646254755615605488797541574018219254862000513335954660121015394263042"),
    MontFp!("15867501907997245742611861546535948215974500738220397037628089767227493819093"),
    MontFp!("7539932446382722911196295678505014722207896420731421007396005899182672288722"),
    MontFp!("20650031654415901201068730851395143530599190859942134916015854595116758755279"),
    MontFp!("17594243554089943202833105778663749788371724401350652555772226420858936509646"),
    MontFp!("4122003324673410708040703309806250077069197458190086521197909761002388569853"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("12104408289771005689277765400890050484363284429413402148682947674069557876451"),
    MontFp!("7787201600957924232694910708781215018945386695951392007300007147229341991519"),
    MontFp!("15221691036455207770118482298704179692111698297372556890835977458541199272577"),
    MontFp!("13290092838786256811972635512478277321839113418883394928495113770723570036499"),
    MontFp!("20329725351298171596243983777981249811899013459728097926270634096657124555744"),
    MontFp!("8391689222523929085725699831179003168287996987723559508658070484406977221982"),
    MontFp!("10882878607719049067056802565579042612025047157138380062617870424510471100201"),
    MontFp!("17695655903600152463874849833992333160305794601692700464387864243745875611325"),
    MontFp!("12755321855243509851337936148976202067599775901931878508988820515368476874022"),
    MontFp!("11968042666510827228200957504365696075582563991340126603502366839762860046828"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("10124485690423535856358913390582501264620085411785297416006236043877114507708"),
    MontFp!("12558473529984289385715229276681934231760781163502843811479576951533113893718"),
    MontFp!("5936360733886179965057649635619163894308023799710134657953682300893661528550"),
    MontFp!("21040481520855919033506477381975232938931416724075315397555677718062230317214"),
    MontFp!("14966956194645370440848882884914307389762902166935685866576640741127815688841"),
    MontFp!("7391862078545417288818959563417759858465590552725982712976092080449759647393"),
    MontFp!("16633824549797648801642612506744472405415525542855249488729335901848409158439"),
    MontFp!("20216985484073038191832753807507654614407863738683335214450220551461690016561"),
    MontFp!("4726527020363988242938141318436465465469896674713590506419149747829290856750"),
    MontFp!("4512334074150569500639439715768362711779986666895423125451450287600482051131"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("1991313112144566452826581889268819771038817888243206662761518802489902683328"),
    MontFp!("1706560170570201311420310472743556428469795866734200606661592618207911225034"),
    MontFp!("16119482480380881775011673097551427699263365996374656730571003799185578609495"),
    MontFp!("14772786620223148242952112766282492896226060500966828267649100161073170220587"),
    MontFp!("1864227497726589380547403710787521757135896158851645064182796260739543128354"),
    MontFp!("16186230574482319575726340129009259210319807369925819218743508200355389772621"),
    MontFp!("20526603565233147739706580222178797966910110444131080348965912473101495938574"),
    MontFp!("20955412549442936480409313285312680339789521736261727558514581094334750562979"),
    MontFp!("4502210503181723044353311332267920493397316675448571336348455742850804513219"),
    MontFp!("7015504948785520549328650466959589225845527280781672008676399241494912673776"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("5672650702235226093506658247939313918835099848351272561320444811045896536823"),
    MontFp!("7863282936448097146469759984743411555422785294724551372658583025709856238095"),
    MontFp!("7680140665481539191589831029013680281737430821947763075680807259511037572833"),
    MontFp!("3074651574840337365012856787438884888001061491916918394194420249205685065066"),
    MontFp!("8096000297906827416364273669231552595318981764076872806579154873670585163788"),
    MontFp!("2446276754226364853286403703430675573204422146588475484065555271875750803254"),
    MontFp!("15790888617577663876185841537484986074273203778475606847823725924918351998233"),
    MontFp!("13483625221090195687641118105691401807909321418717030396523920444826523215105"),
    MontFp!("6064574113479762482187000242929655086852584963796190412820478867908486400449"),
    MontFp!("1819179777811373627209375432985729917930582789583815747126647857419887143419"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("364209656153588443240078391512766015826022066386177442320656205537704728595"),
    MontFp!("11447623653729448937731059302439237575260619269984925648421593960289011181353"),
    MontFp!("18812143770947752079775550066367855613988000663278196712652921547375858513764"),
    MontFp!("16137533589127594323087204290020125611663994658027153728747287332053027600850"),
    MontFp!("2233124954157719586513407167960309667406742518680536336259253908839665190230"),
    MontFp!("3906308068949526471192941139720062587573280917519324629702359779819339556601"),
    MontFp!("12726013772105574147451384727779014956322741888536826098838118933312762733195"),
    MontFp!("10876881069188721262425118852254979045735444267348501915300336349883852214139"),
    MontFp!("9221658588216863805045607900793109839912843456315782627286344062227572236837"),
    MontFp!("21763835764230441049894403585586840185984831630582978374221107070836716720607"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("3646673905510597398845366088421284166035357638648787423145450526543591823994"),
    MontFp!("21037848976591081596643974582258287262515730377532958885206629274616705220585"),
    MontFp!("5812956931262226388402686591473605216457377115289313585009716053420773429923"),
    MontFp!("15017081896143760081055175215101765264095719307504847946073257269549029340449"),
    MontFp!("21025463178514588901606323860863835353981135468020286384701473972833001946117"),
    MontFp!("1928848986917217862618252761680764373467227572092241338340288045140843024961"),
    MontFp!("15086236152115887425849462161749018564698965342732359763518358846398058311311"),
    MontFp!("605375495798217737112712548586970108736295147800406797976311684748777277227"),
    MontFp!("4094190190245668539401811786795513642180904447759997902006780227804116012951"),
    MontFp!("6931818660072162379722670229611986256232847614765196967043073184227439666391"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("10173147882767271847697789662525948525360856651517512693731338679678115869569"),
    MontFp!("19041500027031104890426651058286120769367855344529402161497021345650466458115"),
    MontFp!("5512262845043445216795290203171330210973963620623419586166781665890940266692"),
    MontFp!("859021669705402856895632659990259235357060624074988101588395771323190861881"),
    MontFp!("14931642666353938232543162387243704784195261168367430696234069303720723105562"),
    MontFp!("13396308825217389425380207149517086086520033537560187565522145294297529456429"),
    MontFp!("19189657726865733098609496132188769756423407043570157008624573815261655138407"),
    MontFp!("20094588906288044261650492012323938491033947186910115958987874763147867108847"),
    MontFp!("20433435499323159052916158692782464852730766632222836795518373429535072430633"),
    MontFp!("20841307421799900604228191794688394937391779276252703274519836266775339377628"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("11295248404264342092577147179172265185854515405615885987754791527505436676506"),
    MontFp!("8216203210969034537793996010439133615731685193857682416175791211161712761872"),
    MontFp!("13870828453648597900329275405417533453367489590989571357127207732830615156662"),
    MontFp!("7634051746736389255592199983668793752923444045359379261264455456430467284948"),
    MontFp!("4243700413904799239377798693244408515762283871400678391697531742234792371763"),
    MontFp!("20468781795809739579904769945248950085983417248004886727274920446550219462453"),
    MontFp!("15153351302127003833641085862995395268272549138577918335674844867082440996957"),
    MontFp!("20852182675807505195921523353956560070501750620013971961593924323320744687482"),
    MontFp!("10150993702799986126000683809145587675920949880559963180956824090480950235946"),
    MontFp!("2414266903358218852536858951506775932757544457300057820687042952364432532034"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("8666489368133982500692542124194034439369320862505436256394588250299368031190"),
    MontFp!("12345990388503699273363042545031402734259261918363672512887955056525769698040"),
    MontFp!("17223106007541373427482612503395899224578789565789238322931724482276239103485"),
    MontFp!("12177715527005531002148334801023430903835001714700206485840796625376954435984"),
    MontFp!("2918016170769323444750950064336136117688626951474176616038036601377995439749"),
    MontFp!("5000222968770099315267351333998647628928332761702851814699378450833085165302"),
    MontFp!("4579148545514495673123063838617683717860244490994646736181303002770466723321"),
    MontFp!("11518077623417585664236903389132622860216389566763183915022006584219630910115"),
    MontFp!("18287869158137714464015016677386065933323345481967557748831147434838625776955"),
    MontFp!("15928141438712214372168059124282563455694111761425921739873968722959892639435"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("5026616053077264649242330594015375960983336971593970773477397006286833142953"),
    MontFp!("8250473556366850134689046414075440136556628348270065831619813352179291761843"),
    MontFp!("3899661211803300191782807455143893191358154021945602639681371990108661358717"),
    MontFp!("21421228935274252060305058273628244958797356190527728376595879024002465812994"),
    MontFp!("4566751191178655385361018443299704072934978491962480183120826664981171040925"),
    MontFp!("13597113344953919491544527458958231684138941927378247092828794129785887782888"),
    MontFp!("4166338777790808294801646926235532855733652717308836376461494527905455123458"),
    MontFp!("756069141149399274278799140945428645646578386328804953685410179579560026876"),
    MontFp!("976311958602591748114681032432533676573336906881517943834914718732223825877"),
    MontFp!("18870260181597109453310181620398401277224947804459953080580175137161251446710"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("1213112519754360769278458777285299050897392996144675776818211517642065316811"),
    MontFp!("9648012995431741030945400615083482701423091285786064288956491949293174560232"),
    MontFp!("11358044244901128821218244466887357422918943266680902215074815144502973487937"),
    MontFp!("20381304614552459253442316710986215863142596043025879342109149869215138323474"),
    MontFp!("3827176310466536211889840245825598683158057134482584552086367157612000579189"),
    MontFp!("15445045638452353155349040611234784201404797465360826519646979753236470133644"),
    MontFp!("1159073207481587926914457381818449885077952390352492708210612140130678444606"),
    MontFp!("498404837482842654562358394593702724590198158343566664337335532048222924040"),
    MontFp!("9340686455638886596728745541761562674241523938630893871338937792487647119520"),
    MontFp!("6384594684648448262441643853016835469559776408535201280251116437404124878705"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("17697976342515800487968355038719025857670894030726072957129461034278685025993"),
    MontFp!("15792134306134372112871158403734251418567220790097090623815739444727293339720"),
    MontFp!("3449686476192710506035941992353810656748805829918920866261784986595380952528"),
    MontFp!("5472136647792334968633218159203637182730360939582589708037341452001471739508"),
    MontFp!("15220285739595320718525208914741189043414455712795940877055006166370307228508"),
    MontFp!("3486912368761167494002033460805633865878701540813117710297956535430791384908"),
    MontFp!("21864816523976813759756586079982855254045384237248392021075226329747675486405"),
    MontFp!("17705011855345948901128452985062943711690682049571133985306826417806925429658"),
    MontFp!("7760819572149549352162892804074761309537077320511164373328023767739177299584"),
    MontFp!("21722116953128609386660548588882915064309920894567167191493105962833851444173"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("83340372855166663058593415870303046215518707478677179675455423316419601495"),
    MontFp!("18096144039849353295088587741497439528120144398044362552520211818274198364633"),
    MontFp!("12718261251044978598942230331335442972123628174404649208587718763787149240742"),
    MontFp!("11994559388105420817278649537967588537625848054601358569919245721188827440317"),
    MontFp!("6839681095470751091126152842943090982028723033987913411877803964615907724874"),
    MontFp!("14565346154824970363570162267492586538981546619821444475943227922061614861323"),
    MontFp!("18779098689737101870009920429960431591615126989028915581931275619128420170919"),
    MontFp!("3434012469535738217689694170680726418957313076844803634213695174186893228725"),
    MontFp!("5432154057005920485222258556993057343255205323799754676311828991346712155505"),
    MontFp!("13049953798577516502663745149327846446018886591969009385969055615131860897398"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("7518420771283991440055015702875160645079064589886209114127503252440048482776"),
    MontFp!("6307434493767042333235703054133847336504447565807012508855880875612313860555"),
    MontFp!("14873540633765783111697386681787546851426943667732685317696086292214319092501"),
    MontFp!("4063369527297598252607572079777967641389908474169161356091823693306068995067"),
    MontFp!("4969835070684130321780708967553221336563672495897986519649477208853006628725"),
    MontFp!("19378562779774559655813579896480977927969091996148973149867198287759157449874"),
    MontFp!("15992783579290124319418957584461721716251521410174153693666842660537445382746"),
    MontFp!("7482129822304324652712736586580317735820599282523314419074486663388562218832"),
    MontFp!("2849916621826165872281007942591352112214898340668715375216395081568878554875"),
    MontFp!("10225251026677931981066805765354113792922653996994247743413325621936770889091"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("1576138443636435205984234717323120936532912794728733787962304772706148746410"),
    MontFp!("3338673490017092611834368852849699842260326333214471163205452973755853807835"),
    MontFp!("1363385391234551045081649666013423501217789611458483286681172460253735240438"),
    MontFp!("396904076559162378423906418935057334629205198637096103575821635725341584974"),
    MontFp!("1292500562783006975975529202011945783296862378214580944228897293948061516425"),
    MontFp!("10275741532467519658455131313041166379841897942304140760840157826244487412174"),
    MontFp!("8372776691928795027157274139352490239538447452603349693191084415664600844961"),
    MontFp!("8799926631308976224766800962623136071982458539322812092720536924005307411665"),
    MontFp!("17900994227091476029245791769062479843197497616346534129446723431138170603432"),
    MontFp!("14751766296824349407951915440104542345462854097087405484834246194566188763161"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("16037541527598362080926550701989456004400760293067450779522870044463507099933"),
    MontFp!("2267727077632750187256920122778288518815413471737971824069206589196305577113"),
    MontFp!("12601908642276733264715532800289966874217926941898496684293649546885901879198"),
    MontFp!("518365420608443902215455393994453865998040724482749107352454258390528124768"),
    MontFp!("3089773480278799794116895138641535164581548742862897667707143664317747813994"),
    MontFp!("4746614253164958024929079393676383817585682537334915429416958410752328173667"),
    MontFp!("2586545941493337149315796778948952796050033409095055578899017057888407266679"),
    MontFp!("5640580523735236918672477676899580097108663043464484482913343303950805310411"),
    MontFp!("8545232339066099596884279499332220307481634417366746747676958540983559732838"),
    MontFp!("9041560657564854667943019002377851989875178064813476585173107003594131163640"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("4453550607492948656058427937991073305081926914579392627853529618371788642260"),
    MontFp!("10127224009312154230817433967917731547913311648500615097034750177678519770321"),
    MontFp!("20563033015289036761091196282834816372822662885692837015121899254920376910258"),
    MontFp!("7659615359207177208914515523817409525969760142139264603698592981584960342568"),
    MontFp!("14630781851543383681375274442324446539985759623826529415261248142013809335824"),
    MontFp!("7185047022809565788554185512083933730248443758857162329358341518316913723204"),
    MontFp!("13463986276953886976677456572100120066586552763261145498115137636069291221334"),
    MontFp!("16823327898111027480462437282725821418107890679802681293783609354854861588209"),
    MontFp!("19699348780639412677465461749990098358986168075979259346640996904121560923513"),
    MontFp!("20344257099441181008129816626109375549020886136596957958124922898560608000711"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("7293847610465082137939228323159356738713501156842907447636904806361914578043"),
    MontFp!("12372577225941461776249070370906082909529719507577591751024621745489544020644"),
    MontFp!("11606661419969742934525879033825893015483897829003102419483438970823848025985"),
    MontFp!("5387091076595772641907026816878373730693622459288603447184325968238406306232"),
    MontFp!("11787990660846346512030616327747033588350049984862455853665083840989946008903"),
    MontFp!("11242551312598639563936999731508818473065497944146060092707985298734051848632"),
    MontFp!("8240048386102047561881222752103592337126654676748310328185024770576263292750"),
    MontFp!("2876491787859244512937021111884822026831976716943065988627881839791991708967"),
    MontFp!("13470876411376290245361540713338857250708172346534986435514746857816841817604"),
    MontFp!("19948686385005408792209438903508537359600134056474052453619897488063574525082"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("672508054155728509935068799634956942821904873924548645683127587000816894044"),
    MontFp!("12920576220694230106235125941595327714100916357808767519408249570681327729535"),
    MontFp!("4506667036030355384395000451763029370197326099484207069667873549446726363657"),
    MontFp!("12040186495040588721767969647744867793008823911400393040540530884531110493492"),
    MontFp!("17178802586751134780134090195214510862880619206280525252534203746359532236016"),
    MontFp!("8011528888726475938025221119512750109010487944685310863892520047533277505920"),
    MontFp!("15791906542867733108692479884425156109032957593651343185974858851320898336086"),
    MontFp!("9973026069343277891878452808941405644924881193951124634738431356449000981491"),
    MontFp!("13460759679576936922546098419564715009517592266606682702906761044967032714512"),
    MontFp!("3908561020471107050569872610933903279020463633212167277858147801638572346624"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("18374553182506254940148306915354527964422924028345445725152808287561518603376"),
    MontFp!("13768616258213841913140953914107937100694086468811404602513003133067763003905"),
    MontFp!("17244751673428884377414044126751467291570579289604821747206957105328848130914"),
    MontFp!("2892460076533054875941099737513365670924926116214376864565824806356330372067"),
    MontFp!("922323779745911782652334982111619033898827325121843881340108278538733346346"),
    MontFp!("17302513358672891020619998044479060679904923374836827081302727784397288685310"),
    MontFp!("11406655371293864766426388661115223744773513624666103303415419378476826951505"),
    MontFp!("5020592926361006036075073682026700946950700069725405691528914057575853484147"),
    MontFp!("19919770836741415749050595438876181572693932477533365312024006305745975838832"),
    MontFp!("11075256797101874155451404388957188175526606054675563707596060158284978574142"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("14710338972989752599887224312888984851777229318166803993409084349009078802011"),
    MontFp!("17045030759346533816424384958162566486878474806351237363328435488685140120006"),
    MontFp!("11808098795257177683827515575819438961471168734950629769508445282523969303244"),
    MontFp!("20627389750506478504667615484937651158285087324397471050778550732201663020831"),
    MontFp!("21344924679081383618572154066106185047296533677759085693999938549583260294457"),
    MontFp!("4621538095540800210138361287280049119481227327180428637129846925385658418348"),
    MontFp!("12781865383754779646219350518352756988417545572341211278090139853012757557670"),
    MontFp!("14907137267322343919342458054874017928954273470721006548214818935251381410786"),
    MontFp!("1595703609231105423685756055447919645687193158566781811432281400377028071969"),
    MontFp!("2457548697901490793200656467822696617631391129307452932744211957747919141060"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("18065128187545614633521745643730537793216913299779433234018384150326449130676"),
    MontFp!("11948409807622434327267672525175972327293755841550082793112131804271917597570"),
    MontFp!("12287457160121651051163649730316614600972674015349056296222197660608148160830"),
    MontFp!("132037070278185010677513716126636522542517891301745036903904060635573300538"),
    MontFp!("21303396134117886853070743178022695952035040202269369834626508323244323053462"),
    MontFp!("9201414091920965407115839876341217705713546037886142782860215279674183992351"),
    MontFp!("16287113176139063938326654717961924714306815540250953591565308946791178141048"),
    MontFp!("21305743867344480426431710694690600725023926845208958772174911117054723938809"),
    MontFp!("19099235017111779135567829784421746316122251470190887633533642634937437716877"),
    MontFp!("3076594957236705583943415844127964408514285170865886944258724877364592882440"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("1019014175419942253294110351999643103365551474085452717165412261912386282232"),
    MontFp!("1722210382709693495320676164510144950084080701259388090206591654842601410928"),
    MontFp!("6860265205918031476229979412418556058704290370241418677024606860651212145373"),
    MontFp!("20702234821606415690187516916600071909699161427741596299856166907504000549363"),
    MontFp!("4206043790875257852048140699138218071704854710638326916266539391647206989869"),
    MontFp!("10880529009304304273147017708651130325339361329877685236539936569871423515662"),
    MontFp!("8800800497781713885615253682844067294484328501739198980073558138187945857254"),
    MontFp!("7315710100056179213156846375573392169604543117970798072214753696337786752815"),
    MontFp!("18972247166474746029190692028749903932465454561655068420039865057832183170019"),
    MontFp!("12810654029036203757542327473736435885209016528432361229156106030593109012881"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("570784595556299636763844615417860057802251166891662429009416307135467316458"),
    MontFp!("12304826021984624852241548307146740701371911695428856985229185532539825176283"),
    MontFp!("6207681509106442905859496593082907083475590955577703154935515703882112692225"),
    MontFp!("952948556779259193715040345148010504292888436723535318124654724717243535312"),
    MontFp!("14955652079332009494192159107335741363872385549206765149862037627816104917262"),
    MontFp!("15168792116470271424649775133682064324175916452343834253064250054261618159812"),
    MontFp!("20260345811021374646147578053780074402374435434251524377064861404487635383939"),
    MontFp!("7572987720727879680076781268063989587015649149099979784676522703590648034000"),
    MontFp!("10813372037660041004293641366888213344621861386754119853944346707637418758938"),
    MontFp!("4489386473129346015577171971377390836352390143008613510428269898686893998319"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("15274522087120164024548657926111982392035023990167233969770822962970314597776"),
    MontFp!("12036109842686692886231340731142856857716805071610064374182699268833448473078"),
    MontFp!("16927049448501812868183102238392843931091694628433534958422067188105879678300"),
    MontFp!("4264837776992825762194489850875789221887161545106081038620732660284490465191"),
    MontFp!("12365442325191114337401252679608006725088064599083381368431876212841938101062"),
    MontFp!("15008336152902283945752668755930540246302762884859466512394661798807865985076"),
    MontFp!("11098170360356788300789065803611365663597546397622593877941234410581882718487"),
    MontFp!("2405914554263860198241753529378489673132308178075538785457651495538413399406"),
    MontFp!("15619335356172339745282935469029700935116189636342021913569265295164614114513"),
    MontFp!("2364567930797060683212015624775166246279196243168987306647956516997162765861"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("8503687007409952097640727058864834545128944935122236699702594546252345029895"),
    MontFp!("155786709729412306548656075579086513870634009917276964664778304746443335579"),
    MontFp!("2016248533782318735314338790877312463399506933205692944723929827626393014715"),
    MontFp!("4297385011133464470024371819632885070109478807981771643435952854023223423110"),
    MontFp!("15300343499239679248288112385509504808791689740839612426263929109377557119351"),
    MontFp!("705821159914530785163410472322254089603685711887014584362376074060414799058"),
    MontFp!("699521387308554410897398858344372586289111643353233529708596004566190789530"),
    MontFp!("28376304738708597520576805106925562511011893314521903218364698182363276727"),
    MontFp!("4425464596435608442721610790119509912071520416443054817660035174450640073718"),
    MontFp!("3070201524913906742577363157390636891108291921079107658468005658180546918874"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("2964757906226586947651999675175732063384229423607529277069247617445272471527"),
    MontFp!("1184020678144661502923571097949603369924048068868448014867291893629823771417"),
    MontFp!("2761145149108165487540701693066262708221242486790512480183523734175786816761"),
    MontFp!("21058488537712159524040600701397011441890941849170068189660829736245467544516"),
    MontFp!("12541786005531831976162857100310362564100070587302588669791543696701364316418"),
    MontFp!("13412647766321999367321160657185468260191325055211890669232640742528624955404"),
    MontFp!("19022213692187533047656685175175930665666414481548560725868667073005842326931"),
    MontFp!("17847316615582661458745028236984075153205134482750087894713850866123538903856"),
    MontFp!("16030330004030331179368541439804880072476718667253442706134857334382858082281"),
    MontFp!("16404281875429630948425433316963392901917399285935974477308576971525490810475"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("303954847266314290126575840387747523142577715597059691982007993587926052659"),
    MontFp!("5053674912437628793060853444842303354601947653438690497540657129596828987758"),
    MontFp!("5971910636196282934994477441472583406405160838976567900886005392371671666647"),
    MontFp!("6796468855365898332175093726983199152317815788441455171731177248460285833988"),
    MontFp!("7862549771071707840761724572296799623814610045381205866014453324285135064358"),
    MontFp!("20395625920705635012159831310793873162570646394814763155479478300381464665018"),
    MontFp!("20171413634125821452467780731810073498702798401048651949201432983991597909983"),
    MontFp!("11020517884067881015437692282272794119395463730012290096448192617287537298026"),
    MontFp!("18692475101700442415049412987020546899442599708914395974514146212207311731682"),
    MontFp!("20352926225530102694522077265556968230965315453711421005463322379865082782271"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("13200708591464348403925981089563499285614657113744024258021409558677316294784"),
    MontFp!("9134090846701546836480790836552820868428210295187002657670261777503003924456"),
    MontFp!("4506444082179062138424040781073794954426075312328892326646940235769818683904"),
    MontFp!("1301173025398063966072437270781926301731955089636227849852441511044936479101"),
    MontFp!("15752458875001044208780718344145822936141099940614015278192973330130045878926"),
    MontFp!("12701982369723894103404955895544013374382838202501403803650171667080503029346"),
    MontFp!("9117828714317374580371374867232188890965425013994047665691471302167496777706"),
    MontFp!("11799978532568840599507894039607703874251188980168174012086244226831267094905"),
    MontFp!("10463470646078302093920667364845114638730327353241471770117972950181746414593"),
    MontFp!("5931847011141695709260575150521491219011874051531776057463578071511690543258"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("1126699395647434984278722165269236821055107063421586022841843596132711443069"),
    MontFp!("17436211291406248896735456527864135772835124889533258220802272989715704160434"),
    MontFp!("14414108082538504701675834628004706916858115646166691909596822502731144732309"),
    MontFp!("16823810551400740087585164878755397456162298156430068824742384347398951044337"),
    MontFp!("18676207378833979837623089189318322719020389774486600620007971615637950954678"),
    MontFp!("18682986851840288688711956750723609265378040603958311702931669152830168716700"),
    MontFp!("19553460695593451944347175825251825064917340401664291003970817009911854380212"),
    MontFp!("1391160671481668262497476999560705424844490671263536046560024903084029992963"),
    MontFp!("10506267427286356741891656587026306747618284629345903545593408830195966190268"),
    MontFp!("2747173832301542285279680299243855038829222334881530447206615022315303872956"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("19747297404488232773527754130448425103554611131358284085483296982953828808409"),
    MontFp!("7684301125285692026440001991396877169030801718170229225463785769601984423458"),
    MontFp!("16559078434894096121647655783883347922787361403337367100083306548992140902635"),
    MontFp!("3320180591664061989779101036716569835248014159431073322154321279350166402593"),
    MontFp!("12604410168211736969913301746040621385540151194923879190420760241748233209456"),
    MontFp!("3589118990088707510838991529922033786288533530032751177552161096147719136896"),
    MontFp!("9369728654667419198089181851284767818603875304672726595936389581531285179999"),
    MontFp!("7968678327600005154887866547637689359965819309706794825779402609667254488844"),
    MontFp!("15080678774961769079563684562511596891124057770082991876199283791775298788363"),
    MontFp!("20992079219874465971311540701954165544866683338877630319482238595304723206084"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("23305066703721654843078828941213084995768780004372879034256294925855006546"),
    MontFp!("7377350932802784773757823880059770961267235403214362656516810421497537372197"),
    MontFp!("14515226497708747071033850670904648274706792256352410050181383107553999515767"),
    MontFp!("10396949058475364013109221031234160404787606415698740119916431472297844326386"),
    MontFp!("7479393343540440819370813471844821254111004117508784031399800207256091052535"),
    MontFp!("12823401320755995974041010096019053016864255881240640995949720355928374541016"),
    MontFp!("11099667261733563390118724377959842622730436692617975250187877145601318189924"),
    MontFp!("17031133439683341197021667164363904030175963802259679212556115619066308584009"),
    MontFp!("11673661855339142414761792717870926691246858094455677595427424140154042633225"),
    MontFp!("7811399592930144398650845396033622475483687960427609432501534523919096428923"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("8312016877246813297192495081457233196284227874663999648396615481730012467367"),
    MontFp!("20408464140206477996696442240778657201310911819294152212712667270124879007712"),
    MontFp!("19682675201277285211908686286513680532308878046055246689784148470400877687427"),
    MontFp!("16044319615558319664234420064631694233143345317339549864632223787013448944710"),
    MontFp!("6268166002894965233631859838672653631507412536629568410879750655677355001226"),
    MontFp!("2731549490469067345904537401391105329933591481582771332463274775304886830707"),
    MontFp!("5894658118822633429476962550541996655977194451506597471452623037262014321104"),
    MontFp!("10110333157419691134719117830152123355433861193270089363239018644679111049775"),
    MontFp!("16013626477769153140178364222821651482914771707764841086984268530704218669282"),
    MontFp!("21813557755304881683751098143785689023088353753856357836215697195239611702004"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("12178806908754728235633164587518720007710470130626684042727904815439294962909"),
    MontFp!("21850131342993591860173880951866129195408858118352288603357043282296303596099"),
    MontFp!("17490147019574149771276540742878800799375339011475327692453491146388074834473"),
    MontFp!("16434159851701549122923505650469687532153836177341422844739507031683826334018"),
    MontFp!("1988626770735705973633221093431445525773281768474129214356912630909516950954"),
    MontFp!("8478386351789899712591506478577475404799395808706965900620052174019318035438"),
    MontFp!("11002540476528834675124677964447520321488261644071973303363904872330978699104"),
    MontFp!("8842679397522796482207386952318241058305749762174553627025422546762709126155"),
    MontFp!("20670336122685703992351890445464934082737257564667500438845784797467166113091"),
    MontFp!("15790948766366572645997183201917437839994797832122043655352618854093745030525"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("9471959533417689811737714142748108934282874778405370950518174053980520143252"),
    MontFp!("680839710111226615245815797456963387938832267137848621443933180239297954307"),
    MontFp!("19226950384776931360721050198092771431509930684752974904748773484885750989368"),
    MontFp!("14026702641757316284710546448906399540658047205187534578165024672723698413719"),
    MontFp!("109248714838052071169211207166577732309845665417594874301101388563885050331"),
    MontFp!("5543128140462091329835140347165822924257852279053642928479587148170584604951"),
    MontFp!("4842046206034554217163935518264896797003374664645680035188254354028246661069"),
    MontFp!("1800011255632246254980204790239628967184108508165737766916133515446974834639"),
    MontFp!("14278687915575827404404171114238092362565875866735038191726327431814660424834"),
    MontFp!("16889077759542816446934367921850523021717403147115453618737678825883878233080"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("5946411283285808394906376504688393146869662674760185787042455603481540465896"),
    MontFp!("9899187912896132241744930235702477254337343346835151054456966622576789027984"),
    MontFp!("15883642095556506631679899316891343710646660529231990322325197211750233965722"),
    MontFp!("2256184645932261918016388114655743890851302092673517617957216212843952734808"),
    MontFp!("1107949499231318876511844992558081605761411166074989285112335084719275053812"),
    MontFp!("13818092900981788842317714094771588181362212684308501285727710537768130845218"),
    MontFp!("17382677670710039687618212566061389329872687727791535386610245803414002859858"),
    MontFp!("3863737996694953951418914176389593307237968240630658832758778764879670521445"),
    MontFp!("9196819193006725464783211276153507743157058696278947614332302437782020927985"),
    MontFp!("3886917585817994952423536758648477028791202854348498194434532411489990142165"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("14442044157314100678174354976190122687174757452804257908153542840307836577907"),
    MontFp!("2849687563664197544186424509858917524000544458930962308287681267287998399676"),
    MontFp!("1849066652174481107573093143504700037974847511977101209798315185223009459963"),
    MontFp!("1079587465468797701586353377528153278297157381395272535408915724351025015682"),
    MontFp!("12631159153711040781003683363285876646499750032966779459510582859665504511792"),
    MontFp!("6334623678908869461055668728350092221674366379860218787536232221187748652855"),
    MontFp!("5256377085988092878414803897546938936754958923083679047480602228584476516984"),
    MontFp!("21537485563372297045034272726817736649642636866655672435895694506802781024218"),
    MontFp!("20622482034796461267050661573146048489288409056032264986274569791473304294780"),
    MontFp!("12221859678731957479746679334661728893396126506126483843943554766154873490222"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("6564004643400510962953262585498292712211033780438417376985107800265510451111"),
    MontFp!("5831997391657896102438624793848178895150711344532754694842455454560361852380"),
    MontFp!("2498249347985177467226912828177025690219084437107057849352677166783362392150"),
    MontFp!("18876385952019745487889507408080881450133344229580847705246094363341255243256"),
    MontFp!("2672897576330469149015179415902440538085046830768061598870603383057419160840"),
    MontFp!("13181115090601687695495068856798604627790722069358440023638529462702934265700"),
    MontFp!("11365237895757021453936629431637261650654950724994026090706198563824666407405"),
    MontFp!("9311985766179909174013159744418717201637027433174151332592634908821092077"),
    MontFp!("5757660067808474794505139886650846736688569084132031733415509468325533663952"),
    MontFp!("13468304495477918555216327668525140884435993570872099789616002104208282585413"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("10083563473608644710202770872564001712998038438555311072325385127002709869131"),
    MontFp!("3625942200516417675739336103238799921044475558602856466513786065281377542099"),
    MontFp!("16580349583675994695709226051241265587557804116932370198542611082869808401539"),
    MontFp!("4511431378825138614546799480399118417066090753216845839140262875695549709543"),
    MontFp!("328074713060437975725962801546981284997511375912024507845300015406577046823"),
    MontFp!("3060194481436508212122025979807320934546876501966562103606098707284108717273"),
    MontFp!("16481345454484025288315994223052632560270716233789128382151533261972296215218"),
    MontFp!("7689411846838312719984503116349173433741092543652199032655000195141865323561"),
    MontFp!("20203543100548581582925085204594700199105027395723002708428113973684301533318"),
    MontFp!("7621661340508076995935991373590774064457874247948190462940228007135951227902"),
    MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
    MontFp!("9265745388443619291213599795458732068067109696938706616057139320667158429150"),
    MontFp!("20420911850356760415545546617479884431619149350201610635276505571490429763521"),
    MontFp!("11827742109110593227417625939410922766438875429837247668201503785742428652131"),
    MontFp!("20519168411537190779936267631702409636076876516510902124154167035282541692986"),
    MontFp!("21880759035623300930677933630697460412608414493665952902361843427177326296080"),
    MontFp!("4666756311257455192796774305229624459258864488677689058174087310651786875914"),
    MontFp!("17887039315911403193186866703775654467672391491657957999455462537283842145802"),
    MontFp!("5529559239163081088908568555890212324771345012509269613465629182165427812002"),
    MontFp!("13306548824219676333032339487546407241767961556934015003605485324283250885682"),
    MontFp!("16619522548478824222688310091434959542211899852679631815023615875678448806029"),
];

pub const MDS: [[Fr; 6]; 6] = [
    [
        MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
        MontFp!("7947823415909040438587565055355894256799314737783432792935458921778371169026"),
        MontFp!("16508811191852041977017821887204137955816331040385276110261643892701458724933"),
        MontFp!("1804800467126006102677564831888710635194614232739335985819349312754063580223"),
        MontFp!("11189892034806587650995829160516587240879881493093022855087765921356611070470"),
        MontFp!("20567450145123179140729389574352706949280207113956641415022972885523439610844"),
    ],
    [
        MontFp!("4666756311257455192796774305229624459258864488677689058174087310651786875914"),
        MontFp!("11389253665835451896363091846189307652796786468610595637047377864063404843117"),
        MontFp!("18793736599347263150867965517898541872137378991464725717839931503944801692688"),
        MontFp!("4206344588923325482680116848820594823631536459347642329098796888497153867720"),
        MontFp!("1739462481670645248707834504605096139894257554120906850613041004917967456145"),
        MontFp!("18514227342636266640333254638454588508118462110178719555586534011641424431745"),
    ],
    [
        MontFp!("17887039315911403193186866703775654467672391491657957999455462537283842145802"),
        MontFp!("2824959020572825365047639014537190268717891749361604043531643698340708119767"),
        MontFp!("12521547103713919592301476538318318223836047611311454785951907894055964264287"),
        MontFp!("8658146183671258251984364885894342376430874614261222570603159082682815800788"),
        MontFp!("154390145585284450772861151318029820117470958184878116158462181541183085587"),
        MontFp!("7593705166056392393963956710828665339496927193740869686529339432486182720653"),
    ],
    [
        MontFp!("5529559239163081088908568555890212324771345012509269613465629182165427812002"),
        MontFp!("3729910453162885538930719732708124491456460687048972152311428493400220125686"),
        MontFp!("11942815243552870715777415109008273807076911177089425348095503288499102855779"),
        MontFp!("498938524453430895689241565973888863905147713935369405079343247530256066618"),
        MontFp!("3976257517234324421403708035200810671331954932478384823208414346189926720724"),
        MontFp!("723540703523219510043977323240437576248315561543814629392162302024056718473"),
    ],
    [
        MontFp!("13306548824219676333032339487546407241767961556934015003605485324283250885682"),
        MontFp!("7970147269291664639740298762956131361316495463191268382513594527221399186752"),
        MontFp!("20633313939958767604804835838065337107615699351647541991788258289962727735454"),
        MontFp!("17162090859520817529294904484646695645841022315617926715432606252643123848792"),
        MontFp!("9181379842957190051440498041153333325098774266789773971685141362947015398641"),
        MontFp!("7051606617662816798224904133351061549832959857069896192072217769241273559278"),
    ],
    [
        MontFp!("16619522548478824222688310091434959542211899852679631815023615875678448806029"),
        MontFp!("14965311177811968100298579672135357167599499478246106482433786066289128683961"),
        MontFp!("9792733250919070275775594069208673385381167169182805600474820364274865306108"),
        MontFp!("2069253833779081039049908513863485270550301879399727430830923273191877809560"),
        MontFp!("15847298987712771667136245955631872888473964330474501593909263901393348546986"),
        MontFp!("12244443532166430060291409356011430759892629145539185535677568234713942157668"),
    ],
];

pub const PRE_SPARSE_MDS: [[Fr; 6]; 6] = [
    [
        MontFp!("8266021233794274332054729525918686051968756165685671155584565440479247355160"),
        MontFp!("7947823415909040438587565055355894256799314737783432792935458921778371169026"),
        MontFp!("16508811191852041977017821887204137955816331040385276110261643892701458724933"),
        MontFp!("1804800467126006102677564831888710635194614232739335985819349312754063580223"),
        MontFp!("11189892034806587650995829160516587240879881493093022855087765921356611070470"),
        MontFp!("20567450145123179140729389574352706949280207113956641415022972885523439610844"),
    ],
    [
        MontFp!("11220290770188430243554440853880764304590395593868282585283168427760356108108"),
        MontFp!("19901977315664999534911168633347494028646859061756196278312601054568714810254"),
        MontFp!("647472930233193555535141215714852042038617991285592191457180884846564442026"),
        MontFp!("16675506379682826965301445472011150554863237358260569161185562213244443814315"),
        MontFp!("19069485487643349547123217784377227707792358306598370083020765470964374387286"),
        MontFp!("19447144885641596920703265277039116040655522560943194778651973714213189632209"),
    ],
    [
        MontFp!("8847619268885875566522649549656726099915831749313867499448585513819553531183"),
        MontFp!("2290614346608647473547898623735713612345619278505865571036444057843656279122"),
        MontFp!("11795303608446749064039732871740778736808236885516047499477223597808803448769"),
        MontFp!("17772218381623399714722622896200167418832034064231511553485844907802508798930"),
        MontFp!("12464091218536068376296773683993031798669532476490235317495297079154117017818"),
        MontFp!("1749108016335091336575579492062954803280739397353685522838762722721249602281"),
    ],
    [
        MontFp!("558611450950279481311773436001765784733178556638622261801104409894344161840"),
        MontFp!("9102908824164471876925651009371832480987360445649294956052221102594492419449"),
        MontFp!("12150539932192753889493530818200082960855700740802303126923058971031798305145"),
        MontFp!("640436667494838712307384545176787455768635086712778385044758730531883105031"),
        MontFp!("5721869441642862785591531358461303132779786758609463795772211579736946053459"),
        MontFp!("5509998175993170442195792780899921500086833674511945630252955801625816643527"),
    ],
    [
        MontFp!("14972650475860871528063692308897518566751154907673321698672905090974643977360"),
        MontFp!("10914641538083713044171976856305473918439395776402227508576230774851672774498"),
        MontFp!("21362000083629472233681281442138000679830047511120267431451810114988079796515"),
        MontFp!("12636015718108410270990449085488964533978505034407694134043215376944612923834"),
        MontFp!("8290329356636644338297012048442878154918267560778652244554080399357707666864"),
        MontFp!("6173238923942984620883194764259653113800875753950521495356098217122247705644"),
    ],
    [
        MontFp!("1346872111982302777089390364414649312831970304183179991045042478235231355058"),
        MontFp!("7720809930439713981259399637307913576686651448977581228096330266820484513576"),
        MontFp!("16673930533847657963651120199485867662268374847523001681610451056799362989120"),
        MontFp!("1639818462830260968429078955804196955910508912685071222254026664774483302990"),
        MontFp!("21854903706775590435547867435987125006313360552543106584476898067371966517343"),
        MontFp!("18098507278769171459985932199237135089310047927746287045458445740553194363919"),
    ],
];
